use crate::areas::command::CommandRunner;
use crate::areas::inspector::Inspector;
use crate::artifacts::survey::options::SurveyOptions;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// A survey of every repository below one root directory
pub struct Survey {
    opts: SurveyOptions,
    writer: RefCell<Box<dyn std::io::Write>>,
    runner: Box<dyn CommandRunner>,
}

impl Survey {
    pub fn new(
        opts: SurveyOptions,
        runner: Box<dyn CommandRunner>,
        writer: Box<dyn std::io::Write>,
    ) -> Self {
        Survey {
            opts,
            writer: RefCell::new(writer),
            runner,
        }
    }

    pub fn root(&self) -> &Path {
        &self.opts.root
    }

    pub fn opts(&self) -> &SurveyOptions {
        &self.opts
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn inspector(&self) -> Inspector<'_> {
        Inspector::new(self.runner.as_ref())
    }
}
