//! Error types reported by the viewer.
//!
//! Nothing in here is fatal: the frame loop logs these and keeps going.

use std::io;
use std::path::PathBuf;

#[cfg_attr(rustfmt, rustfmt_skip)]
quick_error! {
    #[doc = "Error encountered while loading a model or rendering a frame."]
    #[derive(Debug)]
    pub enum Error {
        #[doc = "Model bundle could not be fetched or parsed."]
        AssetLoad(path: PathBuf, reason: String) {
            description("model loading error")
            display("unable to load {}: {}", path.display(), reason)
        }

        #[doc = "Backend failed to render a frame."]
        Render(reason: String) {
            description("frame rendering error")
            display("frame rendering error: {}", reason)
        }

        #[doc = "Standard I/O error."]
        Io(err: io::Error) {
            from()
            description("I/O error")
            display("I/O error: {}", err)
            cause(err)
        }
    }
}

impl Error {
    /// Shortcut for building an [`AssetLoad`](enum.Error.html#variant.AssetLoad) error.
    pub fn asset_load<P, R>(
        path: P,
        reason: R,
    ) -> Self
    where
        P: Into<PathBuf>,
        R: ToString,
    {
        Error::AssetLoad(path.into(), reason.to_string())
    }
}
