use std::{
    io,
    sync::{Arc, Mutex},
};

use na_snbt::{BigEndian, Config, List, Value, Version, parse_text, read_from_slice};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

fn logged(run: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("na_snbt=trace"))
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, run);
    captured.text()
}

#[test]
fn test_adoption_is_logged() {
    let output = logged(|| {
        let mut list = List::new();
        list.add(Value::from(1i32), &Config::default()).unwrap();
        list.add(Value::from("abc"), &Config::default()).unwrap();

        let legacy = Config::new(Version::V1_8);
        let mut list = List::new();
        list.add(Value::from(1i32), &legacy).unwrap();
        assert!(!list.add(Value::from("abc"), &legacy).unwrap());
    });
    assert!(output.contains("list adopted string from a new element, was int"), "{output}");
    assert!(output.contains("dropping string element from a list of int"), "{output}");
}

#[test]
fn test_parse_rewind_is_logged() {
    let output = logged(|| {
        assert_eq!(parse_text("1x", &Config::default()).unwrap().as_str(), Some("1x"));
    });
    assert!(output.contains("parsing 2 bytes of SNBT under 1.21.5."), "{output}");
    assert!(output.contains("not a number at offset 0, reading a string."), "{output}");
}

#[test]
fn test_binary_failures_are_logged() {
    let output = logged(|| {
        assert!(read_from_slice::<BigEndian>(&[1, 0, 0, 7, 0], &Config::default()).is_err());
    });
    assert!(output.contains("bytes left after the root tag."), "{output}");
}
