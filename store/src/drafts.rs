//! Transient input buffers backing the create and update forms.
//!
//! Drafts exist for the lifetime of the panel and are only reset after a
//! confirmed submission. Nothing here is persisted.

use crate::models::UserFields;

/// Buffer for the create form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateDraft {
    pub name: String,
    pub email: String,
}

impl CreateDraft {
    /// Project into the request body for a create.
    pub fn fields(&self) -> UserFields {
        UserFields {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    /// Reset both fields to empty strings.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
    }
}

/// Buffer for the update form. The id stays raw text until patch time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EditDraft {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl EditDraft {
    /// Project into the request body for an update. The id travels in the
    /// URL path, not the body.
    pub fn fields(&self) -> UserFields {
        UserFields {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    /// Reset all three fields to empty strings.
    pub fn clear(&mut self) {
        self.id.clear();
        self.name.clear();
        self.email.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_create_draft_is_empty() {
        let mut draft = CreateDraft {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
        };
        draft.clear();
        assert_eq!(draft, CreateDraft::default());
        assert_eq!(draft.name, "");
        assert_eq!(draft.email, "");
    }

    #[test]
    fn cleared_edit_draft_is_empty() {
        let mut draft = EditDraft {
            id: "3".to_string(),
            name: "A".to_string(),
            email: "a@x.com".to_string(),
        };
        draft.clear();
        assert_eq!(draft, EditDraft::default());
    }

    #[test]
    fn fields_carry_name_and_email() {
        let draft = EditDraft {
            id: "9".to_string(),
            name: "B".to_string(),
            email: "b@x.com".to_string(),
        };
        let fields = draft.fields();
        assert_eq!(fields.name, "B");
        assert_eq!(fields.email, "b@x.com");
    }
}
