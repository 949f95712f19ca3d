pub mod json_serializer;
pub mod origin;
