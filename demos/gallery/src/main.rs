//! Builds one of every widget on a headless host, pokes at them and prints
//! what the page and the host saw.
//!
//! Run with `RUST_LOG=debug` to follow scope lifecycles. An optional first
//! argument names a JSON configuration file.

use std::rc::Rc;

use anyhow::Context;
use tether_core::*;
use tether_ui::*;

fn config() -> anyhow::Result<Config> {
    match std::env::args().nth(1) {
        Some(path) => Config::load(&path).with_context(|| format!("reading {path}")),
        None => Ok(Config::default()),
    }
}

fn specs() -> Vec<WidgetSpec> {
    vec![
        WidgetSpec::Alert {
            text: "Error!".into(),
        },
        WidgetSpec::Confirm {
            text: "Delete everything?".into(),
            callback: Rc::new(|answer: bool| log::info!("confirm answered {answer}")),
        },
        WidgetSpec::Highlight {
            text: "fn main() {\n    println!(\"hi\");\n}".into(),
            language: "rust".into(),
        },
        WidgetSpec::Latex {
            source: r"e^{i\pi} + 1 = 0".into(),
        },
        WidgetSpec::Notifications {
            items: vec![
                Text("Build finished"),
                Span(Modifier::new().class("warn"), "Disk almost full"),
                Text("New message"),
            ],
        },
        WidgetSpec::Accordion {
            options: vec![
                AccordionOption::new("Install", &Text("cargo install tether-gallery")),
                AccordionOption::new("Usage", &Text("tether-gallery [config.json]")),
                AccordionOption::from_markup("License", "<em>GPL-3.0-or-later</em>"),
            ],
            multiple: true,
        },
    ]
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = config()?;

    let host = Rc::new(HeadlessHost::new());
    host.answer_confirm(true);
    let mut page = Page::new(host.clone());

    let mut elements = Vec::new();
    for spec in specs() {
        let element = build(spec, &config)?;
        page.mount(element.widget())
            .with_context(|| format!("mounting {}", element.kind()))?;
        elements.push(element);
    }

    for element in &elements {
        match element {
            Element::Alert(alert) => alert.invoke("New error message!".into())?,
            Element::Confirm(confirm) => confirm.trigger()?,
            Element::Highlight(hl) => hl.invoke("let answer = 42;".into())?,
            Element::Latex(latex) => latex.invoke(r"\sum_{k=1}^n k".into())?,
            Element::Notifications(n) => {
                n.dismiss(1);
                n.push(Text("Dismissed the warning"));
            }
            Element::Accordion(acc) => {
                acc.toggle(0);
                acc.toggle(2);
            }
        }
    }

    println!("{}", page.markup());
    println!();
    for call in host.calls() {
        println!("{call:?}");
    }
    Ok(())
}
