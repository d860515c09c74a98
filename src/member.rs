/// A registered patron and the titles currently checked out to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Display name of the member.
    name: String,
    /// Member id; also the lookup identity within the catalog. Intended to be
    /// unique but never enforced.
    member_id: String,
    /// Free-text contact information.
    contact: String,
    /// Titles checked out to this member, in borrow order. Volatile: this list
    /// is never persisted and resets to empty on reload.
    borrowed_titles: Vec<String>,
}

impl Member {
    /// Create a new member with an empty borrowed list.
    #[must_use]
    pub fn new(name: &str, member_id: &str, contact: &str) -> Self {
        Self {
            name: name.to_string(),
            member_id: member_id.to_string(),
            contact: contact.to_string(),
            borrowed_titles: Vec::new(),
        }
    }

    /// Get the member's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the member's id.
    #[must_use]
    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    /// Get the member's contact information.
    #[must_use]
    pub fn contact(&self) -> &str {
        &self.contact
    }

    /// Titles currently checked out to this member, in borrow order.
    #[must_use]
    pub fn borrowed_titles(&self) -> &[String] {
        &self.borrowed_titles
    }

    /// Append a title to the borrowed list unconditionally. No duplicate
    /// check: the same title can appear more than once.
    pub fn add_borrowed(&mut self, title: &str) {
        self.borrowed_titles.push(title.to_string());
    }

    /// Remove the first occurrence of `title` from the borrowed list. Later
    /// occurrences stay; a no-op if the title is absent.
    pub fn remove_borrowed(&mut self, title: &str) {
        if let Some(pos) = self.borrowed_titles.iter().position(|t| t == title) {
            self.borrowed_titles.remove(pos);
        }
    }

    /// Encode the member as one `name,id,contact` line.
    ///
    /// Fields are not escaped, and the borrowed list is deliberately left out
    /// of the encoding.
    #[must_use]
    pub fn encode(&self) -> String {
        let Self { name, member_id, contact, .. } = self;
        format!("{name},{member_id},{contact}")
    }
}
