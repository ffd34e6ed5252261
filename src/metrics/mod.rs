pub use hypervolume::{estimate_reference_point, hyper_volume, DataRange};
pub use hypervolume_2d::HyperVolume2D;
pub use hypervolume_wfg::HyperVolumeWfg;

mod hypervolume;
mod hypervolume_2d;
mod hypervolume_wfg;
