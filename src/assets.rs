//! Asset-loading collaborator interface
//!
//! The core never parses model or texture data. The shell supplies a
//! loader producing opaque handles; this module owns the load policy:
//! primary path, then fallback path, then escalate. A model that fails
//! both paths is fatal (the run cannot start without its visuals);
//! a failed texture is a non-fatal flag the renderer works around.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::sim::FallingKind;

/// Opaque handle to a loaded model
pub type ModelHandle = u32;
/// Opaque handle to a loaded texture
pub type TextureHandle = u32;

/// Everything the draw pass needs a model handle for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelId {
    Croissant,
    Cup,
    Gus,
    Muffin,
    Laser,
    Devil,
    Carrot,
    Wine,
    Plate,
    Alien,
    Aura,
    Rocket,
}

impl ModelId {
    pub const ALL: [ModelId; 12] = [
        ModelId::Croissant,
        ModelId::Cup,
        ModelId::Gus,
        ModelId::Muffin,
        ModelId::Laser,
        ModelId::Devil,
        ModelId::Carrot,
        ModelId::Wine,
        ModelId::Plate,
        ModelId::Alien,
        ModelId::Aura,
        ModelId::Rocket,
    ];

    pub fn for_kind(kind: FallingKind) -> Self {
        match kind {
            FallingKind::Croissant => ModelId::Croissant,
            FallingKind::Cup => ModelId::Cup,
            FallingKind::Gus => ModelId::Gus,
            FallingKind::Muffin => ModelId::Muffin,
            FallingKind::Laser => ModelId::Laser,
            FallingKind::Devil => ModelId::Devil,
            FallingKind::Carrot => ModelId::Carrot,
            FallingKind::Wine => ModelId::Wine,
        }
    }

    /// Model file name under the assets root
    pub fn file_name(self) -> &'static str {
        match self {
            ModelId::Croissant => "croissant.obj",
            ModelId::Cup => "togocup.obj",
            ModelId::Gus => "gus.obj",
            ModelId::Muffin => "muffin.obj",
            ModelId::Laser => "laser.obj",
            ModelId::Devil => "devil.obj",
            ModelId::Carrot => "carrot.obj",
            ModelId::Wine => "wine.obj",
            ModelId::Plate => "plate.obj",
            ModelId::Alien => "ufo.obj",
            ModelId::Aura => "aura.obj",
            ModelId::Rocket => "rocket.obj",
        }
    }
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("model `{name}` failed to load from {primary:?} and {fallback:?}")]
    ModelUnavailable {
        name: String,
        primary: PathBuf,
        fallback: PathBuf,
    },
}

/// Loader supplied by the renderer side; `None` means the file could
/// not be loaded
pub trait AssetLoader {
    fn load_model(&mut self, path: &Path) -> Option<ModelHandle>;
    fn load_texture(&mut self, path: &Path) -> Option<TextureHandle>;
}

/// Try the primary path, then the fallback, then give up
pub fn load_model_with_fallback(
    loader: &mut dyn AssetLoader,
    name: &str,
    primary: &Path,
    fallback: &Path,
) -> Result<ModelHandle, AssetError> {
    if let Some(handle) = loader.load_model(primary) {
        return Ok(handle);
    }
    log::warn!("model `{name}`: primary path failed, trying fallback");
    loader
        .load_model(fallback)
        .ok_or_else(|| AssetError::ModelUnavailable {
            name: name.to_string(),
            primary: primary.to_path_buf(),
            fallback: fallback.to_path_buf(),
        })
}

/// All model handles for a run, loaded up front
#[derive(Debug, Default)]
pub struct AssetCatalog {
    models: Vec<(ModelId, ModelHandle)>,
}

impl AssetCatalog {
    /// Load every model, applying the fallback policy per entry.
    /// The first model that fails both paths aborts the catalog.
    pub fn load_all(
        loader: &mut dyn AssetLoader,
        root: &Path,
        fallback_root: &Path,
    ) -> Result<Self, AssetError> {
        let mut models = Vec::with_capacity(ModelId::ALL.len());
        for id in ModelId::ALL {
            let name = id.file_name();
            let handle = load_model_with_fallback(
                loader,
                name,
                &root.join(name),
                &fallback_root.join(name),
            )?;
            models.push((id, handle));
        }
        log::info!("loaded {} models", models.len());
        Ok(Self { models })
    }

    pub fn handle(&self, id: ModelId) -> Option<ModelHandle> {
        self.models
            .iter()
            .find(|(model, _)| *model == id)
            .map(|(_, handle)| *handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Loader that only succeeds for paths under one root
    struct StubLoader {
        good_root: PathBuf,
        next: ModelHandle,
        attempts: u32,
    }

    impl AssetLoader for StubLoader {
        fn load_model(&mut self, path: &Path) -> Option<ModelHandle> {
            self.attempts += 1;
            if path.starts_with(&self.good_root) {
                self.next += 1;
                Some(self.next)
            } else {
                None
            }
        }

        fn load_texture(&mut self, _path: &Path) -> Option<TextureHandle> {
            None
        }
    }

    #[test]
    fn fallback_path_is_used_when_primary_fails() {
        let mut loader = StubLoader {
            good_root: PathBuf::from("/fallback"),
            next: 0,
            attempts: 0,
        };
        let handle = load_model_with_fallback(
            &mut loader,
            "plate.obj",
            Path::new("/primary/plate.obj"),
            Path::new("/fallback/plate.obj"),
        )
        .unwrap();
        assert_eq!(handle, 1);
        assert_eq!(loader.attempts, 2);
    }

    #[test]
    fn both_paths_failing_is_an_error() {
        let mut loader = StubLoader {
            good_root: PathBuf::from("/nowhere"),
            next: 0,
            attempts: 0,
        };
        let result = load_model_with_fallback(
            &mut loader,
            "plate.obj",
            Path::new("/primary/plate.obj"),
            Path::new("/secondary/plate.obj"),
        );
        assert!(matches!(
            result,
            Err(AssetError::ModelUnavailable { .. })
        ));
    }

    #[test]
    fn catalog_holds_a_handle_per_model() {
        let mut loader = StubLoader {
            good_root: PathBuf::from("/assets"),
            next: 0,
            attempts: 0,
        };
        let catalog =
            AssetCatalog::load_all(&mut loader, Path::new("/assets"), Path::new("/fallback"))
                .unwrap();
        for id in ModelId::ALL {
            assert!(catalog.handle(id).is_some(), "{id:?} missing");
        }
    }

    #[test]
    fn kinds_map_onto_their_models() {
        assert_eq!(ModelId::for_kind(FallingKind::Carrot), ModelId::Carrot);
        assert_eq!(ModelId::for_kind(FallingKind::Laser), ModelId::Laser);
    }
}
