use std::borrow::Cow;

use anyhow::anyhow;
use gpui::{AssetSource, Result, SharedString};
use smallvec::SmallVec;

/// Several asset sources searched in order.
///
/// Lets an application hand GPUI its own assets together with the icons
/// this crate ships.
pub struct LayeredAssets<const N: usize> {
    sources: SmallVec<[Box<dyn AssetSource>; N]>,
}

impl<const N: usize> LayeredAssets<N> {
    pub fn new(sources: [Box<dyn AssetSource>; N]) -> LayeredAssets<N> {
        Self {
            sources: SmallVec::from(sources),
        }
    }
}

#[macro_export]
macro_rules! assets {
    ( $( $source:expr ),* $(,)? ) => {
        $crate::LayeredAssets::new([
            $( Box::new($source) as Box<dyn gpui::AssetSource> ),*
        ])
    };
}

impl<const N: usize> AssetSource for LayeredAssets<N> {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        for source in &self.sources {
            if let Ok(Some(asset)) = source.load(path) {
                return Ok(Some(asset));
            }
        }

        Err(anyhow!("could not find asset at path \"{path}\""))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(self
            .sources
            .iter()
            .filter_map(|source| source.list(path).ok())
            .flatten()
            .collect())
    }
}
