pub(crate) mod button;
pub(crate) mod input;

pub(crate) use button::Button;
pub(crate) use input::Input;
