//! Line oriented menu over a [`MaxHeap`]. All rendering lives here; the
//! heap itself only returns data and [`HeapError`]s.

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::error::HeapError;
use crate::heap::MaxHeap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Build,
    Insert,
    DeleteMax,
    Sort,
    Print,
    Exit,
}

impl Choice {
    pub fn parse(line: &str) -> Option<Choice> {
        match line.trim().parse::<u32>().ok()? {
            1 => Some(Choice::Build),
            2 => Some(Choice::Insert),
            3 => Some(Choice::DeleteMax),
            4 => Some(Choice::Sort),
            5 => Some(Choice::Print),
            6 => Some(Choice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\n===== MAX HEAP MENU =====
1 - Build heap from file
2 - Insert number
3 - Delete max
4 - Heapsort
5 - Print heap
6 - Exit
";

pub struct Menu<R, W> {
    heap: MaxHeap,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(heap: MaxHeap, input: R, output: W) -> Self {
        Self {
            heap,
            input,
            output,
        }
    }

    pub fn heap(&self) -> &MaxHeap {
        &self.heap
    }

    /// Runs until the exit choice or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "{}", MENU)?;
            let line = match self.prompt("\nEnter your choice: ")? {
                Some(line) => line,
                None => break,
            };
            match Choice::parse(&line) {
                Some(Choice::Exit) => break,
                Some(choice) => {
                    debug!("menu choice {:?}", choice);
                    self.dispatch(choice)?;
                }
                None => writeln!(
                    self.output,
                    "That was an invalid choice. Please try again."
                )?,
            }
        }
        writeln!(self.output, "Exiting program...")?;
        self.output.flush()
    }

    fn prompt(&mut self, msg: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", msg)?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn dispatch(&mut self, choice: Choice) -> io::Result<()> {
        match choice {
            Choice::Build => {
                let Some(name) = self.prompt("Enter file name: ")? else {
                    return Ok(());
                };
                match self.heap.build_heap_from_file(&name) {
                    Ok(n) => writeln!(
                        self.output,
                        "\nThe heap has been successfully built from {} ({} values).",
                        name, n
                    ),
                    Err(e) => self.report(&e, "Heap is empty."),
                }
            }
            Choice::Insert => {
                let Some(token) = self.prompt("Enter a number to insert: ")? else {
                    return Ok(());
                };
                match token.parse::<i32>() {
                    Ok(value) => {
                        self.heap.insert(value);
                        writeln!(self.output, "Value {} has been inserted.", value)
                    }
                    Err(e) => {
                        debug!("rejected insert input {:?}: {}", token, e);
                        writeln!(self.output, "{:?} is not a valid integer.", token)
                    }
                }
            }
            Choice::DeleteMax => match self.heap.delete_max() {
                Ok(max) => writeln!(self.output, "Deleted max: {}", max),
                Err(e) => self.report(&e, "\nHeap is empty."),
            },
            Choice::Sort => match self.heap.heap_sort() {
                Ok(sorted) => writeln!(
                    self.output,
                    "\nSorted output:\n{}\n\nHeap destroyed after heap sort (size reset to 0).",
                    join(&sorted)
                ),
                Err(e) => self.report(&e, "\nThe heap is empty. There is nothing to sort."),
            },
            Choice::Print => match self.heap.snapshot().map(join) {
                Ok(rendered) => writeln!(self.output, "\nHeap elements:\n{}", rendered),
                Err(e) => self.report(&e, "\nHeap is empty."),
            },
            Choice::Exit => Ok(()),
        }
    }

    fn report(&mut self, err: &HeapError, empty_msg: &str) -> io::Result<()> {
        match err {
            HeapError::Empty => writeln!(self.output, "{}", empty_msg),
            HeapError::SourceUnavailable { .. } => {
                warn!("{}", err);
                writeln!(
                    self.output,
                    "\nError: {}. If there are no \".txt\" files, create one with \
                     whitespace separated integers.",
                    err
                )
            }
        }
    }
}

fn join(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
