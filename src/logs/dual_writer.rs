use std::io;

/// Tees log output: the primary writer's result is reported, the mirror is best effort.
pub struct DualWriter {
    primary: Box<dyn io::Write + Send + 'static>,
    mirror: Box<dyn io::Write + Send + 'static>,
}

impl DualWriter {
    pub fn new(
        primary: Box<dyn io::Write + Send + 'static>,
        mirror: Box<dyn io::Write + Send + 'static>,
    ) -> Self {
        DualWriter { primary, mirror }
    }
}

impl io::Write for DualWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.primary.write(buf)?;
        let _ = self.mirror.write_all(&buf[..written]);
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        let flushed = self.primary.flush();
        let _ = self.mirror.flush();
        flushed
    }
}

impl From<DualWriter> for Box<dyn io::Write + Send> {
    fn from(writer: DualWriter) -> Self {
        Box::new(writer)
    }
}
