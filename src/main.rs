//! NexusLinks console front end.
//!
//! ```text
//! nexuslinks [--settings PATH] list [--category C] [--search Q] [--sort date|title]
//! nexuslinks [--settings PATH] add --title T --url U [--category C] [--color HEX] [--tag X]...
//! nexuslinks [--settings PATH] delete ID
//! nexuslinks [--settings PATH] tag ID TAG
//! nexuslinks [--settings PATH] untag ID TAG
//! nexuslinks categories
//! ```

use std::error::Error;
use std::process::ExitCode;

use nexuslinks::app::App;
use nexuslinks::managers::bookmark_manager::BookmarkManagerTrait;
use nexuslinks::managers::form_manager::TagEditor;
use nexuslinks::services::favicon::favicon_url;
use nexuslinks::types::bookmark::{Bookmark, CategoryFilter, SortBy, ALL_CATEGORIES, CATEGORIES};

#[derive(Debug, PartialEq)]
enum Command {
    List {
        category: Option<String>,
        search: Option<String>,
        sort: Option<SortBy>,
    },
    Add {
        title: String,
        url: String,
        category: Option<String>,
        color: Option<String>,
        tags: Vec<String>,
    },
    Delete(String),
    Tag(String, String),
    Untag(String, String),
    Categories,
    Help,
}

#[derive(Debug, PartialEq)]
struct Invocation {
    settings: Option<String>,
    command: Command,
}

const USAGE: &str = "usage: nexuslinks [--settings PATH] <list|add|delete|tag|untag|categories> [options]";

fn take_value(args: &mut std::slice::Iter<'_, String>, flag: &str) -> Result<String, String> {
    args.next()
        .cloned()
        .ok_or_else(|| format!("{} expects a value", flag))
}

fn parse_args(raw: &[String]) -> Result<Invocation, String> {
    let mut args = raw.iter();
    let mut settings = None;

    let name = loop {
        match args.next().map(String::as_str) {
            Some("--settings") => settings = Some(take_value(&mut args, "--settings")?),
            Some(other) => break other.to_string(),
            None => break "list".to_string(),
        }
    };

    let command = match name.as_str() {
        "list" => {
            let (mut category, mut search, mut sort) = (None, None, None);
            while let Some(flag) = args.next() {
                match flag.as_str() {
                    "--category" => category = Some(take_value(&mut args, flag)?),
                    "--search" => search = Some(take_value(&mut args, flag)?),
                    "--sort" => {
                        let value = take_value(&mut args, flag)?;
                        sort = Some(
                            SortBy::parse(&value)
                                .ok_or_else(|| format!("--sort expects date or title, got {}", value))?,
                        );
                    }
                    other => return Err(format!("unknown option for list: {}", other)),
                }
            }
            Command::List { category, search, sort }
        }
        "add" => {
            let (mut title, mut url, mut category, mut color) = (None, None, None, None);
            let mut tags = Vec::new();
            while let Some(flag) = args.next() {
                match flag.as_str() {
                    "--title" => title = Some(take_value(&mut args, flag)?),
                    "--url" => url = Some(take_value(&mut args, flag)?),
                    "--category" => category = Some(take_value(&mut args, flag)?),
                    "--color" => color = Some(take_value(&mut args, flag)?),
                    "--tag" => tags.push(take_value(&mut args, flag)?),
                    other => return Err(format!("unknown option for add: {}", other)),
                }
            }
            Command::Add {
                title: title.unwrap_or_default(),
                url: url.unwrap_or_default(),
                category,
                color,
                tags,
            }
        }
        "delete" => Command::Delete(take_value(&mut args, "delete")?),
        "tag" | "untag" => {
            let id = take_value(&mut args, &name)?;
            let tag = take_value(&mut args, &name)?;
            if name == "tag" {
                Command::Tag(id, tag)
            } else {
                Command::Untag(id, tag)
            }
        }
        "categories" => Command::Categories,
        "help" | "--help" | "-h" => Command::Help,
        other => return Err(format!("unknown command: {}", other)),
    };

    Ok(Invocation { settings, command })
}

fn print_card(bookmark: &Bookmark) {
    println!("● {}  [{}]  {}", bookmark.title, bookmark.category, bookmark.accent_color());
    println!("  {}", bookmark.url);
    if !bookmark.tags.is_empty() {
        println!("  tags: {}", bookmark.tags.join(", "));
    }
    println!("  id: {}  icon: {}", bookmark.id, favicon_url(&bookmark.url));
}

fn run(invocation: Invocation) -> Result<(), Box<dyn Error>> {
    if invocation.command == Command::Help {
        println!("{}", USAGE);
        return Ok(());
    }
    if invocation.command == Command::Categories {
        println!("{}", ALL_CATEGORIES);
        for category in CATEGORIES {
            println!("{}", category);
        }
        return Ok(());
    }

    let mut app = App::new(invocation.settings)?;

    match invocation.command {
        Command::List { category, search, sort } => {
            if let Some(category) = category {
                app.set_category(CategoryFilter::parse(&category));
            }
            if let Some(search) = search {
                app.set_search(search);
            }
            if let Some(sort) = sort {
                app.set_sort(sort);
            }
            let total = app.bookmarks.bookmark_count();
            let visible = app.visible_bookmarks();
            println!("{} of {} Bookmarks", visible.len(), total);
            for bookmark in visible {
                println!();
                print_card(bookmark);
            }
        }
        Command::Add { title, url, category, color, tags } => {
            let form = &mut app.add_form;
            form.open();
            form.title = title;
            form.url = url;
            if let Some(category) = category {
                form.category = category;
            }
            if let Some(color) = color {
                form.color = color;
            }
            for tag in tags {
                form.tag_input = tag;
                form.commit_tag()?;
            }
            let bookmark = app.add_form.submit_to(&mut app.bookmarks)?;
            print_card(&bookmark);
        }
        Command::Delete(id) => {
            if app.bookmarks.delete_bookmark(&id)? {
                println!("Deleted {}", id);
            } else {
                println!("No bookmark with id {}", id);
            }
        }
        Command::Tag(id, tag) => {
            let mut editor = TagEditor::new();
            editor.toggle();
            editor.input = tag;
            if !editor.commit(&mut app.bookmarks, &id)? {
                println!("No bookmark with id {}", id);
            }
        }
        Command::Untag(id, tag) => {
            if !TagEditor::new().remove(&mut app.bookmarks, &id, &tag)? {
                println!("No bookmark with id {}", id);
            }
        }
        Command::Categories | Command::Help => {}
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let invocation = match parse_args(&raw) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    match run(invocation) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
