//! Unit tests for account number allocation

use core_kernel::{AccountNumberSequence, ACCOUNT_NUMBER_SEED};

mod allocation {
    use super::*;

    #[test]
    fn test_first_number_uses_the_seed() {
        let seq = AccountNumberSequence::new();
        let number = seq.next();
        assert_eq!(number.value(), ACCOUNT_NUMBER_SEED);
        assert_eq!(number.to_string(), format!("BB{ACCOUNT_NUMBER_SEED}"));
    }

    #[test]
    fn test_numbers_increase_one_by_one() {
        let seq = AccountNumberSequence::starting_at(42);
        assert_eq!(seq.next().value(), 42);
        assert_eq!(seq.next().value(), 43);
        assert_eq!(seq.next().value(), 44);
    }

    #[test]
    fn test_independent_sequences_do_not_share_state() {
        let a = AccountNumberSequence::new();
        let b = AccountNumberSequence::new();
        assert_eq!(a.next().value(), b.next().value());
    }
}

mod concurrency {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_parallel_allocation_never_duplicates() {
        let seq = Arc::new(AccountNumberSequence::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let seq = Arc::clone(&seq);
                std::thread::spawn(move || (0..250).map(|_| seq.next().value()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for value in handle.join().unwrap() {
                assert!(seen.insert(value), "duplicate account number {value}");
            }
        }
        assert_eq!(seen.len(), 1000);
    }
}
