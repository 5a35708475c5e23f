use serde::Serialize;
use serde_json::Value;

use crate::pagination::{Page, Paginated};

/// Resource wrapper capability: defers serialization of an underlying value
/// until resolved, and exposes the wrapped value for paginator detection.
pub trait Resource: Send + Sync {
    /// Resolve the wrapped value into its plain serializable form.
    fn resolve(&self) -> Value;

    /// The wrapped paginator, when the inner value is a paginated collection.
    fn paginator(&self) -> Option<&dyn Paginated> {
        None
    }
}

impl<T: Serialize + Send + Sync> Resource for Page<T> {
    fn resolve(&self) -> Value {
        // Serialization of the caller's own items is outside this layer's
        // responsibility; a non-serializable payload degrades to null.
        serde_json::to_value(self.items()).unwrap_or(Value::Null)
    }

    fn paginator(&self) -> Option<&dyn Paginated> {
        Some(self)
    }
}

/// Body data handed to the success/created builders. The caller picks the
/// variant instead of the builder probing the value's runtime type.
pub enum Payload {
    /// No body data; serialized as `data: null`.
    Empty,
    /// A plain value passed through unchanged.
    Raw(Value),
    /// A resource wrapper, resolved when the envelope is built.
    Resource(Box<dyn Resource>),
}

impl Payload {
    /// Wrap any serializable value as raw payload data.
    pub fn raw<T: Serialize>(value: T) -> Self {
        Payload::Raw(serde_json::to_value(value).unwrap_or(Value::Null))
    }

    /// Wrap a page of items; the builder merges its pagination metadata.
    pub fn page<T: Serialize + Send + Sync + 'static>(page: Page<T>) -> Self {
        Payload::Resource(Box::new(page))
    }

    /// Wrap a custom resource.
    pub fn resource(resource: impl Resource + 'static) -> Self {
        Payload::Resource(Box::new(resource))
    }

    pub(crate) fn paginator(&self) -> Option<&dyn Paginated> {
        match self {
            Payload::Resource(resource) => resource.paginator(),
            _ => None,
        }
    }

    pub(crate) fn resolve(self) -> Value {
        match self {
            Payload::Empty => Value::Null,
            Payload::Raw(value) => value,
            Payload::Resource(resource) => resource.resolve(),
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Payload::Raw(value)
    }
}
