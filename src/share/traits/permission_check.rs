pub trait PermissionCheck: Send + Sync {
    fn has_permission(&self, identity: &str, permission: &str) -> bool;
}

impl<F> PermissionCheck for F
where
    F: Fn(&str, &str) -> bool + Send + Sync,
{
    fn has_permission(&self, identity: &str, permission: &str) -> bool {
        self(identity, permission)
    }
}
