//! Máquina de estados de carga del master data
//!
//! Cada instancia de formulario posee su propia sesión:
//! `Empty → Loading → Ready | LoadFailed`. El resolver solo es invocable
//! con un cache en mano, y el cache solo se obtiene de una sesión `Ready`,
//! así que la precondición queda garantizada por tipos.

use crate::cache::master_data_cache::MasterDataCache;

/// Estado de carga observable de la sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    Loading,
    Ready,
    LoadFailed,
}

/// Sesión de master data por instancia de formulario
#[derive(Debug, Default)]
pub struct MasterDataSession {
    cache: Option<MasterDataCache>,
    loading: bool,
    error: Option<String>,
}

impl MasterDataSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        if self.loading {
            SessionState::Loading
        } else if self.cache.is_some() {
            SessionState::Ready
        } else if self.error.is_some() {
            SessionState::LoadFailed
        } else {
            SessionState::Empty
        }
    }

    /// Iniciar la carga. Válido desde Empty o LoadFailed (reintento).
    /// Una transición inválida es un error de programación del caller:
    /// se loguea y se ignora.
    pub fn begin_loading(&mut self) {
        match self.state() {
            SessionState::Empty | SessionState::LoadFailed => {
                self.loading = true;
                self.error = None;
            }
            state => {
                log::warn!("⚠️ begin_loading ignorado en estado {:?}", state);
            }
        }
    }

    /// Completar la carga con el snapshot construido
    pub fn complete(&mut self, cache: MasterDataCache) {
        if self.state() != SessionState::Loading {
            log::warn!("⚠️ complete ignorado en estado {:?}", self.state());
            return;
        }
        self.loading = false;
        self.error = None;
        self.cache = Some(cache);
    }

    /// Marcar la carga como fallida
    pub fn fail(&mut self, message: impl Into<String>) {
        if self.state() != SessionState::Loading {
            log::warn!("⚠️ fail ignorado en estado {:?}", self.state());
            return;
        }
        let message = message.into();
        log::error!("❌ Carga de master data fallida: {}", message);
        self.loading = false;
        self.error = Some(message);
    }

    /// Snapshot de solo lectura; `Some` únicamente en estado Ready
    pub fn cache(&self) -> Option<&MasterDataCache> {
        if self.loading {
            return None;
        }
        self.cache.as_ref()
    }

    /// Mensaje de error de la última carga fallida
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
