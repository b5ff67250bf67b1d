use std::sync::{Mutex, MutexGuard, PoisonError};

/// Acquires `mutex`, recovering the guard if another thread panicked while holding it.
///
/// Every critical section in the inventory is a single insert, push or retain, so a
/// poisoned lock never guards half-written state.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn remove_all(vec: &mut Vec<String>, item: &str) -> bool {
    let before = vec.len();
    vec.retain(|v| v != item);
    vec.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_remove_all_keeps_order() {
        let mut hosts = vec![
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "b".to_string(),
        ];
        assert!(remove_all(&mut hosts, "b"));
        assert_eq!(hosts, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_all_missing_item() {
        let mut hosts = vec!["a".to_string()];
        assert!(!remove_all(&mut hosts, "z"));
        assert_eq!(hosts, vec!["a"]);
    }

    #[test]
    fn test_lock_recovers_from_poison() {
        let shared = Arc::new(Mutex::new(1));
        let clone = Arc::clone(&shared);

        let result = std::thread::spawn(move || {
            let _guard = clone.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(result.is_err());
        assert!(shared.is_poisoned());
        assert_eq!(*lock(&shared), 1);
    }
}
