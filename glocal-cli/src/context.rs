use glocal::Glocal;
use std::path::Path;

pub struct GlocalCliContext {
    pub glocal: Glocal,
}

impl GlocalCliContext {
    /// Load configuration from `config_path`, or from the default files and environment
    pub fn new(config_path: Option<&Path>) -> glocal::Result<Self> {
        let glocal = match config_path {
            Some(path) => Glocal::from_file(path)?,
            None => Glocal::from_env()?,
        };

        Ok(Self { glocal })
    }
}
