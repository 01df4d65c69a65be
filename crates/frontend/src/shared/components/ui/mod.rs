pub mod button;
pub mod code_editor;
pub mod form_group;
pub mod input;
pub mod secret_input;

pub use button::Button;
pub use code_editor::CodeEditor;
pub use form_group::FormGroup;
pub use input::Input;
pub use secret_input::SecretInput;
