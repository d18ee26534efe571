//! Pure patch logic for the in-memory users list.
//!
//! Every network round-trip ends in exactly one [`ListEvent`], and
//! [`reduce`] folds it into the current list. Keeping this separate from the
//! transport means the state transitions can be tested without a server:
//! the caller performs the request, wraps whatever came back, and applies it.

use crate::models::{User, UserFields};

/// One finished round-trip against the users collection.
#[derive(Clone, Debug, PartialEq)]
pub enum ListEvent {
    /// Full collection, in the order the backend returned it.
    Fetched(Vec<User>),
    /// Backend-created user carrying its assigned id.
    Created(User),
    /// Update confirmed for `id` (raw form text) with the submitted fields.
    Updated { id: String, fields: UserFields },
    /// Delete confirmed for this id.
    Deleted(i32),
    /// Transport or status failure of any operation.
    Failed,
}

/// How an update patch lands on the local list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// The matching entry will be rewritten.
    Applied,
    /// The id parsed but no loaded entry carries it.
    NoMatch,
    /// The id is not a base-10 integer. The backend may still have accepted
    /// the update, so the caller should report this.
    InvalidId,
}

/// Fold one event into the current list.
///
/// Fetched collections replace the list wholesale, reversed so display order
/// is the inverse of backend order. Creates prepend. Updates rewrite the
/// name/email of the entry whose id equals the parsed draft id, leaving
/// every other entry untouched; an unparseable or unmatched id changes
/// nothing. Deletes filter by id equality. Failures return the list as it
/// was.
pub fn reduce(current: Vec<User>, event: ListEvent) -> Vec<User> {
    match event {
        ListEvent::Fetched(mut fetched) => {
            fetched.reverse();
            fetched
        }
        ListEvent::Created(user) => {
            let mut next = Vec::with_capacity(current.len() + 1);
            next.push(user);
            next.extend(current);
            next
        }
        ListEvent::Updated { id, fields } => {
            let Ok(id) = id.parse::<i32>() else {
                return current;
            };
            current
                .into_iter()
                .map(|user| {
                    if user.id == id {
                        User {
                            id,
                            name: fields.name.clone(),
                            email: fields.email.clone(),
                        }
                    } else {
                        user
                    }
                })
                .collect()
        }
        ListEvent::Deleted(id) => current.into_iter().filter(|user| user.id != id).collect(),
        ListEvent::Failed => current,
    }
}

/// Classify how an update for `id_text` would land on `current`, so the
/// caller can surface the cases where the backend and the local list are
/// about to diverge.
pub fn edit_outcome(current: &[User], id_text: &str) -> EditOutcome {
    match id_text.parse::<i32>() {
        Ok(id) if current.iter().any(|user| user.id == id) => EditOutcome::Applied,
        Ok(_) => EditOutcome::NoMatch,
        Err(_) => EditOutcome::InvalidId,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i32, name: &str, email: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    fn fields(name: &str, email: &str) -> UserFields {
        UserFields {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn fetched_list_displays_in_reverse() {
        let fetched = vec![user(2, "b", "b@x.com"), user(1, "a", "a@x.com")];
        let list = reduce(Vec::new(), ListEvent::Fetched(fetched));
        let ids: Vec<i32> = list.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn fetched_replaces_whatever_was_loaded() {
        let prior = vec![user(9, "old", "old@x.com")];
        let list = reduce(prior, ListEvent::Fetched(vec![user(1, "a", "a@x.com")]));
        assert_eq!(list, vec![user(1, "a", "a@x.com")]);
    }

    #[test]
    fn created_user_is_prepended() {
        let prior = vec![user(2, "b", "b@x.com"), user(1, "a", "a@x.com")];
        let list = reduce(prior.clone(), ListEvent::Created(user(3, "A", "a@x.com")));
        assert_eq!(list.len(), 3);
        assert_eq!(list[0], user(3, "A", "a@x.com"));
        assert_eq!(&list[1..], &prior[..]);
    }

    #[test]
    fn updated_rewrites_only_the_matching_entry() {
        let prior = vec![
            user(1, "a", "a@x.com"),
            user(2, "b", "b@x.com"),
            user(3, "c", "c@x.com"),
        ];
        let list = reduce(
            prior.clone(),
            ListEvent::Updated {
                id: "2".to_string(),
                fields: fields("B", "B@x.com"),
            },
        );
        assert_eq!(list[0], prior[0]);
        assert_eq!(list[1], user(2, "B", "B@x.com"));
        assert_eq!(list[2], prior[2]);
    }

    #[test]
    fn updated_with_unknown_id_changes_nothing() {
        let prior = vec![user(1, "a", "a@x.com")];
        let list = reduce(
            prior.clone(),
            ListEvent::Updated {
                id: "42".to_string(),
                fields: fields("B", "B@x.com"),
            },
        );
        assert_eq!(list, prior);
    }

    #[test]
    fn updated_with_unparseable_id_changes_nothing() {
        let prior = vec![user(1, "a", "a@x.com"), user(2, "b", "b@x.com")];
        for bad in ["", "abc", "1.5", "1abc", " 1"] {
            let list = reduce(
                prior.clone(),
                ListEvent::Updated {
                    id: bad.to_string(),
                    fields: fields("B", "B@x.com"),
                },
            );
            assert_eq!(list, prior, "id {bad:?} must not patch anything");
        }
    }

    #[test]
    fn deleted_removes_exactly_that_id() {
        let prior = vec![user(1, "a", "a@x.com"), user(2, "b", "b@x.com")];
        let list = reduce(prior, ListEvent::Deleted(1));
        assert_eq!(list, vec![user(2, "b", "b@x.com")]);
    }

    #[test]
    fn deleted_with_absent_id_changes_nothing() {
        let prior = vec![user(1, "a", "a@x.com")];
        let list = reduce(prior.clone(), ListEvent::Deleted(42));
        assert_eq!(list, prior);
    }

    #[test]
    fn failure_keeps_the_list_identical() {
        let prior = vec![user(1, "a", "a@x.com"), user(2, "b", "b@x.com")];
        let list = reduce(prior.clone(), ListEvent::Failed);
        assert_eq!(list, prior);
    }

    #[test]
    fn edit_outcome_classifies_the_three_cases() {
        let list = vec![user(1, "a", "a@x.com")];
        assert_eq!(edit_outcome(&list, "1"), EditOutcome::Applied);
        assert_eq!(edit_outcome(&list, "2"), EditOutcome::NoMatch);
        assert_eq!(edit_outcome(&list, "one"), EditOutcome::InvalidId);
        assert_eq!(edit_outcome(&list, ""), EditOutcome::InvalidId);
    }
}
