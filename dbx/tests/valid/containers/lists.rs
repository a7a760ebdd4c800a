use dbx::daos;
use std::collections::VecDeque;

daos! {
    impl scores_db;

    #[dao]
    pub trait ScoreDao {
        #[query("SELECT points FROM scores ORDER BY round")]
        fn in_rounds(&self) -> Vec<i64>;

        #[query("SELECT points FROM scores ORDER BY round DESC")]
        fn latest_first(&self) -> VecDeque<i64>;

        #[query("SELECT player FROM scores WHERE points > ? ORDER BY round")]
        fn players_over(&self, points: i64) -> Vec<String>;

        #[query("SELECT ratio FROM scores ORDER BY round")]
        fn ratios(&self) -> Vec<f64>;

        #[query("SELECT badge FROM scores ORDER BY round")]
        fn badges(&self) -> Vec<Vec<u8>>;
    }
}

pub fn test() {
    let handle = super::super::database(
        "CREATE TABLE scores (round INTEGER, player TEXT, points INTEGER, ratio REAL, badge BLOB);
         INSERT INTO scores VALUES
            (3, 'cy', 10, 0.5, x'03'),
            (1, 'al', 30, 1.0, x'01'),
            (2, 'al', 30, 0.25, x'0202');",
    );
    let scores = scores_db::ScoreDaoImpl::new(handle);
    use scores_db::ScoreDao;

    assert_eq!(scores.in_rounds(), vec![30, 30, 10]);
    assert_eq!(scores.latest_first(), VecDeque::from([10, 30, 30]));
    assert_eq!(scores.players_over(20), vec!["al", "al"]);
    assert_eq!(scores.ratios(), vec![1.0, 0.25, 0.5]);
    assert_eq!(scores.badges(), vec![vec![1], vec![2, 2], vec![3]]);
}
