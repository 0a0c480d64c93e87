use heapless::Vec;

use crate::action::KeyAction;
use crate::morph::{LayerMorph, MORPH_MAX_NUM, MorphConfigError};

/// One layer-morph declaration, as extracted from the keyboard configuration.
///
/// `bindings` must hold exactly the normal and the morphed binding, in that
/// order, mirroring the binding list of the declaring config node.
#[derive(Clone, Copy, Debug)]
pub struct MorphDecl<'a> {
    pub bindings: &'a [KeyAction],
    pub layers: &'a [u8],
}

/// Config for layer-morph behaviors: the registry of validated instances,
/// built once at startup. `KeyAction::Morph(i)` refers to `morphs[i]`.
#[derive(Clone, Debug, Default)]
pub struct MorphsConfig {
    pub morphs: Vec<LayerMorph, MORPH_MAX_NUM>,
}

impl MorphsConfig {
    /// Build the registry from a declaration list. Any invalid declaration
    /// rejects the whole config.
    pub fn from_decls(decls: &[MorphDecl]) -> Result<Self, MorphConfigError> {
        let mut morphs = Vec::new();
        for decl in decls {
            let morph = LayerMorph::from_bindings(decl.bindings, decl.layers)?;
            morphs.push(morph).map_err(|_| MorphConfigError::TooManyMorphs)?;
        }
        Ok(Self { morphs })
    }

    /// Look up a morph instance by registry index.
    pub fn get(&self, index: u8) -> Option<&LayerMorph> {
        self.morphs.get(index as usize)
    }
}
