//! Rendering of the C source artifact and its atomic write.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use tracing::debug;

use crate::descriptor::ImageDescriptor;
use crate::error::{ConvertError, Result};
use crate::naming::AssetNames;

/// Byte literals per output line
pub const BYTES_PER_LINE: usize = 16;

/// Settings for the generated C file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    /// Header pulled in at the top of the file
    pub include: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            include: "ui.h".to_string(),
        }
    }
}

/// Render the pixel array and its `lv_img_dsc_t` as C source
pub fn render(
    names: &AssetNames,
    source_name: &str,
    descriptor: &ImageDescriptor,
    data: &[u8],
    options: &EmitOptions,
) -> String {
    let data_symbol = names.data_symbol();
    // "0xHH, " is six bytes; the rest is header, indentation and descriptor
    let mut out = String::with_capacity(data.len() * 6 + data.len() / BYTES_PER_LINE * 5 + 512);

    out.push_str(&format!("#include \"{}\"\n\n", options.include));
    out.push_str("#ifndef LV_ATTRIBUTE_MEM_ALIGN\n");
    out.push_str("    #define LV_ATTRIBUTE_MEM_ALIGN\n");
    out.push_str("#endif\n\n");

    out.push_str(&format!("// IMAGE DATA: {}\n", source_name));
    out.push_str(&format!(
        "const LV_ATTRIBUTE_MEM_ALIGN uint8_t {}[] = {{\n",
        data_symbol
    ));

    for (i, byte) in data.iter().enumerate() {
        if i % BYTES_PER_LINE == 0 {
            out.push_str("    ");
        }
        out.push_str(&format!("0x{:02X}, ", byte));
        if (i + 1) % BYTES_PER_LINE == 0 {
            out.push('\n');
        }
    }
    out.push_str("\n};\n\n");

    out.push_str(&format!("const lv_img_dsc_t {} = {{\n", names.symbol));
    out.push_str(&format!(
        "    .header.always_zero = {},\n",
        descriptor.always_zero
    ));
    out.push_str(&format!("    .header.w = {},\n", descriptor.width));
    out.push_str(&format!("    .header.h = {},\n", descriptor.height));
    out.push_str(&format!("    .data_size = sizeof({}),\n", data_symbol));
    out.push_str(&format!("    .header.cf = {},\n", descriptor.format.tag()));
    out.push_str(&format!("    .data = {}\n", data_symbol));
    out.push_str("};\n");

    out
}

/// Write `contents` to `path`, replacing any existing file.
///
/// The text goes to a temporary file in the destination directory first and
/// is renamed into place, so a failed write leaves no partial file.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = output_dir(path);
    if !dir.is_dir() {
        return Err(ConvertError::OutputDirectoryMissing(dir.to_path_buf()));
    }

    let io_err = |source: io::Error| ConvertError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = create_temp(dir).map_err(io_err)?;
    // Keep the mode of a file being replaced
    if let Ok(meta) = fs::metadata(path) {
        if meta.is_file() {
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(io_err)?;
        }
    }
    tmp.write_all(contents.as_bytes()).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

/// Temporary file with mode 0666 less the umask, as `File::create` makes
fn create_temp(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Directory an output path will be created in
pub(crate) fn output_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
