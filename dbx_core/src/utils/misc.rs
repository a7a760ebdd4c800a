use proc_macro2::Span;
use std::collections::LinkedList;
use syn::Ident;

pub(crate) fn singlelist<T>(item: T) -> LinkedList<T> {
    let mut list = LinkedList::new();
    list.push_back(item);
    list
}

pub(crate) fn new_id(id: &str) -> Ident {
    Ident::new(id, Span::call_site())
}

/// Collects every error from a sequence of results, keeping the successes only
/// when there were no errors at all.
pub(crate) fn collect_all<O, E>(
    results: impl IntoIterator<Item = Result<O, LinkedList<E>>>,
) -> Result<Vec<O>, LinkedList<E>> {
    let mut oks = Vec::new();
    let mut errs = LinkedList::new();
    for res in results {
        match res {
            Ok(o) => oks.push(o),
            Err(mut es) => errs.append(&mut es),
        }
    }
    if errs.is_empty() {
        Ok(oks)
    } else {
        Err(errs)
    }
}
