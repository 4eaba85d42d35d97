// src/common/policy.rs
//
// Única fuente de verdad para la regla de multitenencia: antes cada handler
// repetía el chequeo "nivel < 8 => filtrar por cliente" por su cuenta.

use crate::common::error::AppError;

// Nivel a partir del cual un usuario opera sobre todos los clientes.
// Los niveles intermedios observados (1, 3, 6) no tienen semántica propia:
// por debajo del umbral todos quedan acotados a su propio cliente.
pub const SUPER_ADMIN_LEVEL: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantScope {
    // Super admin: sin filtro de cliente.
    Global,
    // Acotado a un único client_id.
    Client(i32),
}

impl TenantScope {
    // Deriva el alcance a partir de las credenciales verificadas del token.
    // Un usuario sin cliente asignado y sin nivel de super admin no tiene
    // ningún dato al que acceder: se rechaza de plano.
    pub fn from_claims(permission_level: i32, client_id: Option<i32>) -> Result<Self, AppError> {
        if permission_level >= SUPER_ADMIN_LEVEL {
            Ok(TenantScope::Global)
        } else {
            client_id.map(TenantScope::Client).ok_or(AppError::Forbidden)
        }
    }

    // ¿Puede este alcance tocar datos del cliente dado?
    pub fn allows_client(&self, client_id: Option<i32>) -> bool {
        match self {
            TenantScope::Global => true,
            TenantScope::Client(own) => client_id == Some(*own),
        }
    }

    // ¿Puede este alcance asignar el nivel de permiso dado al crear o editar
    // un usuario? Solo un super admin otorga niveles de super admin; si no,
    // un usuario acotado podría fabricarse un token global en el siguiente
    // login.
    pub fn may_assign_level(&self, permission_level: i32) -> bool {
        match self {
            TenantScope::Global => true,
            TenantScope::Client(_) => permission_level < SUPER_ADMIN_LEVEL,
        }
    }

    // Filtro a aplicar en las consultas: None = sin filtro.
    pub fn client_filter(&self) -> Option<i32> {
        match self {
            TenantScope::Global => None,
            TenantScope::Client(id) => Some(*id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_8_is_global() {
        let scope = TenantScope::from_claims(8, None).unwrap();
        assert_eq!(scope, TenantScope::Global);
        assert!(scope.allows_client(Some(5)));
        assert!(scope.allows_client(None));
        assert_eq!(scope.client_filter(), None);
    }

    #[test]
    fn levels_below_threshold_are_tenant_scoped() {
        for level in [1, 3, 6, 7] {
            let scope = TenantScope::from_claims(level, Some(5)).unwrap();
            assert_eq!(scope, TenantScope::Client(5));
            assert!(scope.allows_client(Some(5)));
            assert!(!scope.allows_client(Some(6)));
            assert!(!scope.allows_client(None));
            assert_eq!(scope.client_filter(), Some(5));
        }
    }

    #[test]
    fn scoped_scope_cannot_grant_super_admin() {
        let acotado = TenantScope::Client(5);
        assert!(acotado.may_assign_level(1));
        assert!(acotado.may_assign_level(7));
        assert!(!acotado.may_assign_level(SUPER_ADMIN_LEVEL));
        assert!(!acotado.may_assign_level(99));

        assert!(TenantScope::Global.may_assign_level(SUPER_ADMIN_LEVEL));
    }

    #[test]
    fn scoped_user_without_client_is_rejected() {
        let err = TenantScope::from_claims(3, None).unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }
}
