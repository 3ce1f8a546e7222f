pub mod resource_name;

pub use resource_name::{Namespaces, ResourceName};
