use tracing::{debug, info};

use crate::container::{Container, ContainerFormat, GroupPath, JsonTreeFormat};
use crate::core::{
    PlotSeriesBundle, PlotTarget, SimulationConfigurationFile, assemble_signal_series,
    resolve_plot_target,
};
use crate::error::{ThumbnailError, ThumbnailResult};
use crate::fetch::{ContentFetcher, ContentReference};
use crate::render::{RenderSize, Renderer, build_render_frame};

use super::ThumbnailConfig;

/// Request-level facade consumed by host applications.
///
/// Each call fetches, decodes, selects and renders independently. Nothing
/// survives between calls except the configuration and the backends.
pub struct ThumbnailEngine<F: ContentFetcher, R: Renderer> {
    fetcher: F,
    renderer: R,
    config: ThumbnailConfig,
    container_format: Box<dyn ContainerFormat>,
}

impl<F: ContentFetcher, R: Renderer> ThumbnailEngine<F, R> {
    pub fn new(fetcher: F, renderer: R, config: ThumbnailConfig) -> ThumbnailResult<Self> {
        config.validate()?;
        Ok(Self {
            fetcher,
            renderer,
            config,
            container_format: Box::new(JsonTreeFormat),
        })
    }

    /// Replaces the decoder used for recording containers.
    #[must_use]
    pub fn with_container_format(mut self, format: impl ContainerFormat + 'static) -> Self {
        self.container_format = Box::new(format);
        self
    }

    #[must_use]
    pub fn config(&self) -> &ThumbnailConfig {
        &self.config
    }

    #[must_use]
    pub fn container_format_name(&self) -> &'static str {
        self.container_format.name()
    }

    #[must_use]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Renders the canonical trace of the recording at `reference`.
    ///
    /// `dpi` falls back to the configured default. The size is checked before
    /// anything is fetched.
    pub fn render_trace(
        &mut self,
        reference: &str,
        auth_token: &str,
        dpi: Option<u32>,
    ) -> ThumbnailResult<Vec<u8>> {
        let reference = ContentReference::parse(reference)?;
        let size = self.trace_size(dpi).validate()?;
        info!(reference = %reference, ?size, "rendering trace thumbnail");

        let bytes = self.fetcher.fetch(&reference, auth_token)?;
        self.render_trace_bytes(&bytes, dpi)
    }

    /// Trace pipeline over already retrieved container bytes.
    pub fn render_trace_bytes(&mut self, bytes: &[u8], dpi: Option<u32>) -> ThumbnailResult<Vec<u8>> {
        let dpi = dpi.unwrap_or(self.config.trace.default_dpi);
        let viewport = RenderSize::Dpi(dpi).viewport(self.config.trace.figure_size())?;

        let signal = {
            let container = self.open_container(bytes)?;
            let root = GroupPath::parse(&self.config.trace.root_group);
            assemble_signal_series(container.as_ref(), &root, self.config.trace.preference_index)?
        };
        debug!(
            source = signal.source(),
            samples = signal.len(),
            unit = signal.unit(),
            "assembled signal series"
        );

        let bundle =
            PlotSeriesBundle::from_signal(&signal)?.bounded(self.config.max_points_per_series);
        let frame = build_render_frame(&bundle, viewport, &self.config.trace_style)?.with_dpi(dpi);
        self.renderer.render(&frame)
    }

    /// Renders one plot of the simulation configuration at `reference`.
    ///
    /// `Ok(None)` means the document holds no data for `target`. Missing
    /// width or height fall back to the configured defaults independently.
    pub fn render_simulation_plot(
        &mut self,
        reference: &str,
        auth_token: &str,
        target: PlotTarget,
        width: Option<u32>,
        height: Option<u32>,
    ) -> ThumbnailResult<Option<Vec<u8>>> {
        let reference = ContentReference::parse(reference)?;
        let size = self.simulation_size(width, height).validate()?;
        info!(reference = %reference, %target, ?size, "rendering simulation plot");

        let bytes = self.fetcher.fetch(&reference, auth_token)?;
        self.render_simulation_bytes(&bytes, target, width, height)
    }

    /// Simulation pipeline over an already retrieved JSON document.
    pub fn render_simulation_bytes(
        &mut self,
        bytes: &[u8],
        target: PlotTarget,
        width: Option<u32>,
        height: Option<u32>,
    ) -> ThumbnailResult<Option<Vec<u8>>> {
        let viewport = self
            .simulation_size(width, height)
            .viewport(self.config.trace.figure_size())?;
        let document = SimulationConfigurationFile::from_json_slice(bytes)?;

        let Some(bundle) = resolve_plot_target(&document, target)? else {
            debug!(%target, "simulation document has no plot data for target");
            return Ok(None);
        };
        let bundle = bundle.bounded(self.config.max_points_per_series);
        let frame = build_render_frame(&bundle, viewport, &self.config.simulation_style)?;
        self.renderer.render(&frame).map(Some)
    }

    fn trace_size(&self, dpi: Option<u32>) -> RenderSize {
        RenderSize::Dpi(dpi.unwrap_or(self.config.trace.default_dpi))
    }

    fn simulation_size(&self, width: Option<u32>, height: Option<u32>) -> RenderSize {
        RenderSize::Pixels {
            width: width.unwrap_or(self.config.simulation.default_width),
            height: height.unwrap_or(self.config.simulation.default_height),
        }
    }

    fn open_container(&self, bytes: &[u8]) -> ThumbnailResult<Box<dyn Container>> {
        self.container_format.open(bytes).map_err(|err| {
            ThumbnailError::InvalidContainer(format!("{}: {err}", self.container_format.name()))
        })
    }
}
