// Utils compartidos

pub mod history;
