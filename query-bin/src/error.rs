pub use anyhow::{anyhow, bail, Result};
