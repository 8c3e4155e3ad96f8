use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Receives compression results in corpus order.
pub trait CompressionSink {
    fn emit(&mut self, compressed: &str, original: &str) -> io::Result<()>;

    fn end_document(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writes compressed text only, with a blank line after every document.
pub struct WriterSink<W: Write> {
    out: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> CompressionSink for WriterSink<W> {
    fn emit(&mut self, compressed: &str, _original: &str) -> io::Result<()> {
        writeln!(self.out, "{compressed}")
    }

    fn end_document(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Two line-aligned files: compressed output and the original surface text.
///
/// Every document ends with a blank line in both files.
pub struct FilePairSink {
    compressed: BufWriter<File>,
    original: BufWriter<File>,
}

impl FilePairSink {
    /// Create `output` and its `<output>.orig` companion.
    pub fn create(output: &Path) -> io::Result<Self> {
        Ok(Self {
            compressed: BufWriter::new(File::create(output)?),
            original: BufWriter::new(File::create(original_path(output))?),
        })
    }
}

impl CompressionSink for FilePairSink {
    fn emit(&mut self, compressed: &str, original: &str) -> io::Result<()> {
        writeln!(self.compressed, "{compressed}")?;
        writeln!(self.original, "{original}")
    }

    fn end_document(&mut self) -> io::Result<()> {
        writeln!(self.compressed)?;
        writeln!(self.original)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.compressed.flush()?;
        self.original.flush()
    }
}

/// `<output>.orig`
pub fn original_path(output: &Path) -> PathBuf {
    let mut name = OsString::from(output.as_os_str());
    name.push(".orig");
    PathBuf::from(name)
}
