//! Property-based tests for board write-through.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::board::ProjectBoard;
    use crate::repository::{MemoryStorage, ProjectRepository, SlotRepository};

    #[derive(Debug, Clone)]
    enum Op {
        Add(String, String),
        Delete(usize),
        Edit(usize, String, String),
        CancelEdit(usize),
    }

    fn text() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), Just("   ".to_string()), "[ a-zA-Z0-9]{0,12}"]
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (text(), text()).prop_map(|(t, d)| Op::Add(t, d)),
            any::<usize>().prop_map(Op::Delete),
            (any::<usize>(), text(), text()).prop_map(|(i, t, d)| Op::Edit(i, t, d)),
            any::<usize>().prop_map(Op::CancelEdit),
        ]
    }

    proptest! {
        #[test]
        fn test_memory_matches_storage(ops in prop::collection::vec(op(), 0..40)) {
            let storage = MemoryStorage::new();
            let repo = SlotRepository::new(storage.clone(), "projects");
            let mut board = ProjectBoard::open(repo);
            let reader = SlotRepository::new(storage, "projects");

            for op in ops {
                let len = board.projects().len();
                match op {
                    Op::Add(title, description) => {
                        let _ = board.add(&title, &description);
                    }
                    Op::Delete(i) if len > 0 => {
                        let id = board.projects()[i % len].id().clone();
                        board.delete(&id);
                    }
                    Op::Edit(i, title, description) if len > 0 => {
                        let id = board.projects()[i % len].id().clone();
                        board.start_edit(&id).unwrap();
                        board.set_edit_title(title);
                        board.set_edit_description(description);
                        let _ = board.save_edit();
                    }
                    Op::CancelEdit(i) if len > 0 => {
                        let id = board.projects()[i % len].id().clone();
                        board.start_edit(&id).unwrap();
                        board.cancel_edit();
                    }
                    _ => {}
                }

                prop_assert!(board.projects().iter().all(|p| !p.title().trim().is_empty()));
                prop_assert_eq!(reader.load(), board.projects().to_vec());
            }
        }
    }
}
