use colored::Colorize;
use phonebook::api::{CmdMessage, MessageLevel};
use phonebook::model::Record;
use phonebook::pagination::Page;
use phonebook::table;
use std::io::{self, Write};

const MENU: &[(&str, &str)] = &[
    ("1", "Display records"),
    ("2", "Add record"),
    ("3", "Edit record"),
    ("4", "Search records"),
    ("5", "Delete record"),
    ("6", "Change page size"),
    ("0", "Exit"),
];

pub(super) fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Phonebook".bold())?;
    for (key, label) in MENU {
        writeln!(out, "{}. {}", key, label)?;
    }
    Ok(())
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_page<W: Write>(out: &mut W, page: &Page) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Page {} of {}", page.number, page.total)?;
    write!(out, "{}", table::render(&page.records))
}

pub(super) fn print_records<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    write!(out, "{}", table::render(records))
}

pub(super) fn print_numbered<W: Write>(out: &mut W, records: &[Record]) -> io::Result<()> {
    write!(out, "{}", table::render_numbered(records))
}
