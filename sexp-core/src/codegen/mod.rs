pub mod codegen;

pub mod prelude {
    pub use super::codegen::*;
}
