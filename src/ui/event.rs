/// What the user did during a frame. Render code emits these; the app applies
/// them to the session once the frame has been laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    EditDraft(String),
    Submit,
    ToggleTheme,
}

impl UiAction {
    pub fn to_log_line(&self) -> String {
        match self {
            Self::EditDraft(text) => format!("edit_draft chars={}", text.chars().count()),
            Self::Submit => "submit".to_string(),
            Self::ToggleTheme => "toggle_theme".to_string(),
        }
    }
}
