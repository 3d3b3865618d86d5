//! Rendering the model into artifacts and writing them out.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use graphgen_core::{GenerateConfig, Package};
use tracing::{debug, info};

use crate::error::{GenerateError, GenerateResult};
use crate::render::{AskamaRenderer, RenderInput, Renderer};
use crate::template::TemplateName;
use crate::tidy::tidy;
use crate::view::{EntityView, PackageView};

/// Package-scope templates written to the output directory.
const PACKAGE_TEMPLATES: [TemplateName; 3] = [
    TemplateName::Client,
    TemplateName::PageOptions,
    TemplateName::Iter,
];

/// Templates rendered once per entity, in this order.
const ENTITY_TEMPLATES: [TemplateName; 3] = [
    TemplateName::Entity,
    TemplateName::Options,
    TemplateName::Query,
];

/// One rendered output file, held in memory until written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub template: TemplateName,
    /// Destination on disk.
    pub path: PathBuf,
    /// Path relative to the output directory, `/`-separated. Used to match
    /// reference files.
    pub key: String,
    pub contents: String,
}

/// Template-driven generator for one configuration.
pub struct Generator<R: Renderer = AskamaRenderer> {
    config: GenerateConfig,
    renderer: R,
}

impl Generator<AskamaRenderer> {
    pub fn new(config: GenerateConfig) -> Self {
        Self {
            config,
            renderer: AskamaRenderer,
        }
    }
}

impl<R: Renderer> Generator<R> {
    /// Use a different rendering backend.
    pub fn with_renderer<S: Renderer>(self, renderer: S) -> Generator<S> {
        Generator {
            config: self.config,
            renderer,
        }
    }

    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Render every artifact for `package` without touching the filesystem.
    pub fn generate(&self, package: &Package) -> GenerateResult<Vec<Artifact>> {
        let view = PackageView::build(package, &self.config)?;
        let output_dir = self.config.output_dir();
        check_reserved_names(&view)?;

        let mut planned = Vec::new();
        for template in PACKAGE_TEMPLATES {
            planned.push((template, None, output_dir.join(template.file_name(""))));
        }
        for entity in &view.entities {
            for template in ENTITY_TEMPLATES {
                let path = output_dir.join(template.file_name(&entity.snake));
                planned.push((template, Some(entity), path));
            }
        }
        if self.config.emit_cli {
            let path = self
                .config
                .cli_dir(&package.name)
                .join(TemplateName::Cli.file_name(""));
            planned.push((TemplateName::Cli, None, path));
        }
        check_collisions(&planned, &output_dir)?;

        let mut artifacts = Vec::with_capacity(planned.len());
        for (template, entity, path) in planned {
            let input = match entity {
                Some(entity) => RenderInput::Entity(&view, entity),
                None => RenderInput::Package(&view),
            };
            artifacts.push(self.render_one(template, input, path, &output_dir)?);
        }

        info!(
            package = %package.name,
            entities = package.entities.len(),
            artifacts = artifacts.len(),
            "Rendered package"
        );
        Ok(artifacts)
    }

    /// Render everything, then write. Nothing is written if rendering fails.
    pub fn generate_to_disk(&self, package: &Package) -> GenerateResult<Vec<Artifact>> {
        let artifacts = self.generate(package)?;
        write_artifacts(&artifacts)?;
        Ok(artifacts)
    }

    fn render_one(
        &self,
        template: TemplateName,
        input: RenderInput<'_>,
        path: PathBuf,
        output_dir: &Path,
    ) -> GenerateResult<Artifact> {
        let contents = tidy(&self.renderer.render(template, input)?);
        let key = artifact_key(&path, output_dir);
        debug!(template = %template, file = %key, bytes = contents.len(), "Rendered artifact");
        Ok(Artifact {
            template,
            path,
            key,
            contents,
        })
    }
}

/// Names the generated code declares or imports next to the entity types.
const RESERVED_NAMES: [&str; 11] = [
    "Cli",
    "Client",
    "Command",
    "Conn",
    "ConnArgs",
    "Options",
    "PageIter",
    "PageOption",
    "PageOptions",
    "Query",
    "Result",
];

fn check_reserved_names(view: &PackageView) -> GenerateResult<()> {
    for entity in &view.entities {
        if let Some(reserved) = RESERVED_NAMES.iter().copied().find(|r| *r == entity.name) {
            return Err(GenerateError::ReservedName {
                entity: entity.name.clone(),
                reserved,
            });
        }
    }
    Ok(())
}

/// Reject a plan in which two artifacts share an output key.
fn check_collisions(
    planned: &[(TemplateName, Option<&EntityView>, PathBuf)],
    output_dir: &Path,
) -> GenerateResult<()> {
    let mut owners: HashMap<String, String> = HashMap::new();
    for (template, entity, path) in planned {
        let owner = match entity {
            Some(entity) => format!("entity `{}`", entity.name),
            None => format!("the `{template}` template"),
        };
        let key = artifact_key(path, output_dir);
        if let Some(first) = owners.get(&key) {
            return Err(GenerateError::PathCollision {
                key,
                first: first.clone(),
                second: owner,
            });
        }
        owners.insert(key, owner);
    }
    Ok(())
}

/// Write artifacts, creating parent directories as needed.
pub fn write_artifacts(artifacts: &[Artifact]) -> GenerateResult<()> {
    for artifact in artifacts {
        if let Some(parent) = artifact.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| GenerateError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&artifact.path, &artifact.contents).map_err(|source| {
            GenerateError::Io {
                path: artifact.path.clone(),
                source,
            }
        })?;
        debug!(path = %artifact.path.display(), "Wrote artifact");
    }
    info!(count = artifacts.len(), "Wrote artifacts");
    Ok(())
}

/// Output-relative key of `path`. A command surface placed outside the
/// output directory is keyed as `cmd/<dir>/main.rs`.
fn artifact_key(path: &Path, output_dir: &Path) -> String {
    match path.strip_prefix(output_dir) {
        Ok(relative) => relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => {
            let file = path
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_default();
            let dir = path
                .parent()
                .and_then(Path::file_name)
                .map(|d| d.to_string_lossy().into_owned())
                .unwrap_or_default();
            format!("cmd/{dir}/{file}")
        }
    }
}
