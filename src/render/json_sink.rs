//! Schreibt jede Szene als eine JSON-Zeile (z.B. nach stdout).

use super::{OverlayScene, OverlaySink};
use std::io::Write;

/// JSON-Lines-Ausgabe der Zeichenbefehle.
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Gibt den inneren Writer zurück.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OverlaySink for JsonSink<W> {
    fn submit(&mut self, scene: &OverlayScene) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.writer, scene)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{DrawCommand, LineTopology};
    use glam::DVec3;

    #[test]
    fn test_writes_one_line_per_scene() {
        let mut sink = JsonSink::new(Vec::new());
        let mut scene = OverlayScene::new();
        scene.push(DrawCommand::Polyline {
            points: vec![DVec3::ZERO, DVec3::new(1.0, 0.0, 2.0)],
            topology: LineTopology::Lines,
            color: [1.0, 0.0, 0.0, 1.0],
        });

        sink.submit(&scene).expect("schreibbar");
        sink.submit(&OverlayScene::new()).expect("schreibbar");

        let output = String::from_utf8(sink.into_inner()).expect("UTF-8");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let value: serde_json::Value = serde_json::from_str(lines[0]).expect("gültiges JSON");
        let command = &value["commands"][0];
        assert_eq!(command["kind"], "polyline");
        assert_eq!(command["topology"], "lines");
        assert_eq!(command["points"][1][2], 2.0);
        assert_eq!(lines[1], r#"{"commands":[]}"#);
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("Pipe geschlossen"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_is_reported() {
        let mut sink = JsonSink::new(BrokenWriter);
        assert!(sink.submit(&OverlayScene::new()).is_err());
    }
}
