// Catalog Source
//
// Seam to the catalog-extraction collaborator. Connection handling and the
// catalog queries themselves live behind this trait.

use super::rows::CatalogRows;

/// Something that can produce one consistent set of catalog rows
pub trait CatalogSource {
    /// Fetch all rows for one inspection call
    fn fetch(&mut self) -> anyhow::Result<CatalogRows>;
}

/// Rows that were already extracted (e.g. loaded from a dump)
impl CatalogSource for CatalogRows {
    fn fetch(&mut self) -> anyhow::Result<CatalogRows> {
        Ok(self.clone())
    }
}

impl<F> CatalogSource for F
where
    F: FnMut() -> anyhow::Result<CatalogRows>,
{
    fn fetch(&mut self) -> anyhow::Result<CatalogRows> {
        self()
    }
}
