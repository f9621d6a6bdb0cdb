/// User flag that staff can flip from the users list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserToggle {
    Block,
    Verify,
}

impl UserToggle {
    /// Action segment appended to `/users/{id}`.
    pub fn action(self) -> &'static str {
        match self {
            UserToggle::Block => "toggle-block",
            UserToggle::Verify => "toggle-verify",
        }
    }
}
