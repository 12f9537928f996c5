use subtle::ConstantTimeEq;

pub struct CheckAdminUseCase {
    pub admin_password: String,
}

impl CheckAdminUseCase {
    /// Compare in constant time for equal-length inputs.
    pub fn execute(&self, candidate: &str) -> bool {
        let valid: bool = self
            .admin_password
            .as_bytes()
            .ct_eq(candidate.as_bytes())
            .into();
        if !valid {
            tracing::warn!("admin password rejected");
        }
        valid
    }
}
