//! The site: every page behind its route, rendered and exported.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use folio_core::PerfSpan;

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::page::{Page, PageView, Route, html};

/// All pages, each laid out in its own viewport.
pub struct Site {
    config: SiteConfig,
    views: Vec<PageView>,
}

impl Site {
    /// Build every page for `config`.
    pub fn new(config: SiteConfig) -> Result<Self> {
        config.validate()?;
        let views = Route::ALL
            .into_iter()
            .map(|route| PageView::new(Page::build(route)?, &config))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(target: "folio::site", pages = views.len(), "site built");
        Ok(Self { config, views })
    }

    /// The configuration the site was built with.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Every route, in navigation order.
    pub fn routes(&self) -> impl Iterator<Item = Route> + '_ {
        self.views.iter().map(|view| view.page().route())
    }

    /// The view served at `path`.
    pub fn view(&self, path: &str) -> Result<&PageView> {
        let route: Route = path.parse()?;
        self.views
            .iter()
            .find(|view| view.page().route() == route)
            .ok_or_else(|| Error::UnknownRoute(path.to_string()))
    }

    /// Mutable access to the view served at `path`, e.g. to scroll it.
    pub fn view_mut(&mut self, path: &str) -> Result<&mut PageView> {
        let route: Route = path.parse()?;
        self.views
            .iter_mut()
            .find(|view| view.page().route() == route)
            .ok_or_else(|| Error::UnknownRoute(path.to_string()))
    }

    /// Render the page at `path` as a complete document.
    pub fn render(&self, path: &str) -> Result<String> {
        let view = self.view(path)?;
        Ok(self.render_view(view))
    }

    fn render_view(&self, view: &PageView) -> String {
        let _span = PerfSpan::new("render_page");
        let page = view.page();
        html::render_document(
            &self.config.site.title,
            page.title(),
            page.route(),
            view.render_body(),
        )
        .into_string()
    }

    /// Render every page.
    pub fn render_all(&self) -> Vec<(Route, String)> {
        self.views
            .iter()
            .map(|view| (view.page().route(), self.render_view(view)))
            .collect()
    }

    /// Write every page under `dir` (`index.html`, `about/index.html`, ...).
    ///
    /// Returns the written paths in route order.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        let mut written = Vec::with_capacity(self.views.len());
        for (route, document) in self.render_all() {
            let path = dir.join(route.file_path());
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
            }
            write_atomic(&path, document.as_bytes())?;
            tracing::info!(target: "folio::site", %route, path = %path.display(), "page exported");
            written.push(path);
        }
        Ok(written)
    }

    /// Write every page into the configured output directory.
    pub fn export(&self) -> Result<Vec<PathBuf>> {
        self.write_to(&self.config.site.output_dir)
    }
}

/// Write through a temporary file in the same directory, then rename.
///
/// If any step fails the target is left unchanged.
fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| "page".to_string());
    let temp_path = parent.join(format!(".{}.tmp.{}", file_name, std::process::id()));

    let result = (|| {
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(contents)?;
        file.sync_all()?;
        fs::rename(&temp_path, path)
    })();

    result.map_err(|e| {
        fs::remove_file(&temp_path).ok();
        Error::io(path, e)
    })
}
