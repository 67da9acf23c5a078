use crate::models::Session;

/// Order sessions by most recent activity first
///
/// The sort is stable: sessions with equal `last_active` keep discovery order.
pub fn rank_sessions(sessions: &mut [Session]) {
    sessions.sort_by(|a, b| b.last_active.cmp(&a.last_active));
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::models::TranscriptRecord;

    fn session(id: &str, secs: i64) -> Session {
        let ts = Utc.timestamp_opt(secs, 0).unwrap();
        let record = TranscriptRecord { timestamp: Some(ts), ..Default::default() };
        Session::new("proj", id, PathBuf::from(format!("/p/{}.jsonl", id)), ts, vec![record])
    }

    fn ids(sessions: &[Session]) -> Vec<&str> {
        sessions.iter().map(|s| s.session_id.as_str()).collect()
    }

    #[test]
    fn test_rank_most_recent_first() {
        let mut sessions = vec![session("t2", 200), session("t3", 100), session("t1", 300)];
        rank_sessions(&mut sessions);
        assert_eq!(ids(&sessions), vec!["t1", "t2", "t3"]);
    }

    #[test]
    fn test_rank_independent_of_input_order() {
        let mut a = vec![session("t3", 100), session("t2", 200), session("t1", 300)];
        let mut b = vec![session("t1", 300), session("t3", 100), session("t2", 200)];
        rank_sessions(&mut a);
        rank_sessions(&mut b);
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn test_rank_ties_keep_discovery_order() {
        let mut sessions = vec![session("b", 100), session("a", 100), session("c", 200)];
        rank_sessions(&mut sessions);
        assert_eq!(ids(&sessions), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_rank_empty() {
        let mut sessions: Vec<Session> = Vec::new();
        rank_sessions(&mut sessions);
        assert!(sessions.is_empty());
    }
}
