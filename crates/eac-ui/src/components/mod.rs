pub(crate) mod daisy;
