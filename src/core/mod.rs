pub mod assembler;
pub mod metadata;
pub mod protocol;
pub mod scale;
pub mod selector;
pub mod series;
pub mod simulation;
pub mod types;
pub mod windowing;

pub use assembler::{TraceSelection, assemble_signal_series, select_trace};
pub use metadata::{RecordingMetadata, extract_metadata, get_conversion, get_rate, get_unit};
pub use protocol::{PROTOCOL_PRIORITY, RESPONSE_MARKER, select_protocol, select_response};
pub use scale::{LinearScale, ScaleFit};
pub use selector::{SelectionContext, find_trailing_digits, rank_candidates, select_element};
pub use series::{PlotSeries, PlotSeriesBundle, SeriesKind, SignalSeries};
pub use simulation::{
    PlotData, PlotTarget, SimulationConfigurationFile, SingleNeuronModelSimulationConfig,
    StimulusPlotData, resolve_plot_target,
};
pub use types::Viewport;
pub use windowing::decimate_min_max;
