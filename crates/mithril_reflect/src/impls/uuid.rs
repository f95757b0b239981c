use uuid::Uuid;

crate::impls::impl_opaque!(Uuid, "uuid::Uuid", "Uuid", "uuid");
