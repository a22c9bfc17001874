use chrono::Local;
use image::{ImageFormat, RgbImage};
use std::ffi::OsString;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Prefixes a console message with the local wall clock time.
pub fn log_line(message: &str) -> String {
    format!("[{}] {}", Local::now().format("%H:%M:%S"), message)
}

/// Encodes `image` as PNG and writes it to `path`, replacing any existing file.
/// The parent directory must already exist.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    write_png_atomically(image, path)
        .map_err(|e| format!("failed to write {}: {}", path.display(), e).into())
}

fn write_png_atomically(image: &RgbImage, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

    let temp_path = temp_path_for(path);
    if let Err(e) = fs::write(&temp_path, &bytes).and_then(|()| fs::rename(&temp_path, path)) {
        // Clean up so a failed run leaves nothing behind
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }
    Ok(())
}

/// `dir/1024.png` -> `dir/1024.png.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, Rgb};
    use tempfile::TempDir;

    fn sample() -> RgbImage {
        RgbImage::from_fn(16, 8, |x, y| Rgb([x as u8 * 10, y as u8 * 20, 7]))
    }

    #[test]
    fn test_log_line_has_timestamp_prefix() {
        let line = log_line("Icon saved");
        assert!(line.starts_with('['));
        assert_eq!(&line[9..11], "] ");
        assert!(line.ends_with("Icon saved"));
    }

    #[test]
    fn test_temp_path_is_a_sibling() {
        let path = Path::new("a/b/1024.png");
        assert_eq!(temp_path_for(path), PathBuf::from("a/b/1024.png.tmp"));
    }

    #[test]
    fn test_save_png_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("icon.png");

        save_png(&sample(), &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.color(), ColorType::Rgb8);
        assert_eq!(decoded.to_rgb8().as_raw(), sample().as_raw());
        assert!(!temp_dir.path().join("icon.png.tmp").exists());
    }

    #[test]
    fn test_save_png_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("icon.png");
        fs::write(&path, b"not a png").unwrap();

        save_png(&sample(), &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (16, 8));
    }

    #[test]
    fn test_save_png_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing/icon.png");

        let err = save_png(&sample(), &path).unwrap_err();

        assert!(err.to_string().contains("failed to write"));
        assert!(!temp_dir.path().join("missing").exists());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }
}
