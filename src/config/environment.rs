//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración,
//! incluida la agencia casa contra la que se evalúan los escenarios de liquidación.

use std::env;
use uuid::Uuid;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    /// Agencia casa designada por configuración. Todos los escenarios de
    /// liquidación se clasifican relativos a esta agencia.
    pub house_agency_id: Uuid,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.trim().to_string())
                .collect(),
            house_agency_id: env::var("HOUSE_AGENCY_ID")
                .expect("HOUSE_AGENCY_ID must be set")
                .parse()
                .expect("HOUSE_AGENCY_ID must be a valid UUID"),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
