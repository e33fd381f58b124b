#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    use tether_core::*;

    use crate::*;

    fn setup() -> (Rc<HeadlessHost>, Page, Theme) {
        let host = Rc::new(HeadlessHost::new());
        let page = Page::new(host.clone());
        (host, page, Theme::default())
    }

    fn node(widget: &Widget, name: &str) -> NodeRef {
        NodeRef {
            scope: widget.scope().id(),
            name: name.to_string(),
        }
    }

    fn texts(list: &Signal<Vec<Notice>>) -> Vec<String> {
        list.get().iter().map(|n| n.content.text_content()).collect()
    }

    fn options(n: usize) -> Vec<AccordionOption> {
        (0..n)
            .map(|i| AccordionOption::new(format!("Panel {i}"), &Text(format!("body {i}"))))
            .collect()
    }

    fn rerenders(host: &HeadlessHost) -> usize {
        host.calls()
            .iter()
            .filter(|c| matches!(c, HostCall::Rerender { .. }))
            .count()
    }

    #[test]
    fn test_alert_updates_text_and_pops_dialog() {
        let (host, mut page, theme) = setup();
        let alert = Alert::new("Error!", &theme).unwrap();
        page.mount(alert.widget()).unwrap();
        assert!(host.alerts().is_empty());

        alert.invoke("New error message!".to_string()).unwrap();
        assert_eq!(alert.text().get(), "New error message!");
        assert_eq!(alert.widget().output::<String>().unwrap().get(), "New error message!");
        assert_eq!(host.alerts(), vec!["New error message!"]);
    }

    #[test]
    fn test_alert_trigger_repops_stored_text() {
        let (host, mut page, theme) = setup();
        let alert = Alert::new("Error!", &theme).unwrap();
        page.mount(alert.widget()).unwrap();

        alert.trigger().unwrap();
        alert.trigger().unwrap();
        assert_eq!(host.alerts(), vec!["Error!", "Error!"]);
        assert_eq!(alert.text().get(), "Error!");
    }

    #[test]
    fn test_alert_silent_until_mounted() {
        let (host, mut page, theme) = setup();
        let alert = Alert::new("Error!", &theme).unwrap();
        alert.invoke("early".to_string()).unwrap();
        assert!(host.alerts().is_empty());

        page.mount(alert.widget()).unwrap();
        alert.trigger().unwrap();
        assert_eq!(host.alerts(), vec!["early"]);
    }

    #[test]
    fn test_confirm_callback_once_per_answer() {
        let (host, mut page, theme) = setup();
        let answers = Rc::new(RefCell::new(Vec::new()));
        let confirm = Confirm::new(
            {
                let answers = answers.clone();
                move |a| answers.borrow_mut().push(a)
            },
            "Sure?",
            &theme,
        )
        .unwrap();
        page.mount(confirm.widget()).unwrap();
        assert!(answers.borrow().is_empty());

        host.answer_confirm(true);
        confirm.invoke(ConfirmCall::text("Delete file?")).unwrap();
        assert_eq!(*answers.borrow(), vec![true]);
        assert!(confirm.value().get());

        // Queue empty: the default answer is false.
        confirm.trigger().unwrap();
        assert_eq!(*answers.borrow(), vec![true, false]);
        assert!(!confirm.value().get());
        assert_eq!(
            host.calls()
                .iter()
                .filter(|c| matches!(c, HostCall::Confirm(t) if t == "Delete file?"))
                .count(),
            2
        );
    }

    #[test]
    fn test_confirm_accepts_either_argument_order() {
        let (host, mut page, theme) = setup();
        let confirm = Confirm::new(|_| {}, "Sure?", &theme).unwrap();
        page.mount(confirm.widget()).unwrap();
        host.set_default_answer(true);

        let first = Rc::new(RefCell::new(Vec::new()));
        let cb: ConfirmCallback = {
            let first = first.clone();
            Rc::new(move |a: bool| first.borrow_mut().push(a))
        };
        confirm.invoke(("Proceed?", cb).into()).unwrap();
        assert_eq!(*first.borrow(), vec![true]);

        let second = Rc::new(RefCell::new(Vec::new()));
        let cb: ConfirmCallback = {
            let second = second.clone();
            Rc::new(move |a: bool| second.borrow_mut().push(a))
        };
        confirm.invoke((cb, "Really?".to_string()).into()).unwrap();
        assert_eq!(*first.borrow(), vec![true]);
        assert_eq!(*second.borrow(), vec![true]);
        assert_eq!(confirm.text().get(), "Really?");
    }

    #[test]
    fn test_confirm_callback_only_call_opens_nothing() {
        let (host, mut page, theme) = setup();
        let confirm = Confirm::new(|_| {}, "Sure?", &theme).unwrap();
        page.mount(confirm.widget()).unwrap();
        host.take_calls();

        confirm.invoke(ConfirmCall::callback(|_| {})).unwrap();
        assert!(host.calls().is_empty());
        assert!(confirm.widget().state().get_value::<Rc<RefCell<ConfirmCallback>>>("function").is_ok());
    }

    #[test]
    fn test_highlight_paints_on_import_and_change() {
        let (host, mut page, theme) = setup();
        let assets = AssetPaths::default();
        let hl = Highlight::new("fn main() {}", "rust", &theme, &assets).unwrap();
        page.mount(hl.widget()).unwrap();

        let code = node(hl.widget(), "code");
        assert_eq!(
            host.take_calls(),
            vec![
                HostCall::LoadAsset(Asset::script(&assets.highlight_script)),
                HostCall::LoadAsset(Asset::stylesheet(&assets.highlight_style)),
                HostCall::WriteText {
                    node: code.clone(),
                    text: "fn main() {}".to_string()
                },
                HostCall::Highlight {
                    node: code.clone(),
                    language: "rust".to_string()
                },
            ]
        );

        hl.invoke("let x = 1 < 2;".to_string()).unwrap();
        assert_eq!(host.content(&code).as_deref(), Some("let x = 1 &lt; 2;"));
        assert_eq!(host.take_calls().len(), 2);
    }

    #[test]
    fn test_highlight_requires_language() {
        let theme = Theme::default();
        let err = Highlight::new("x", " ", &theme, &AssetPaths::default()).err();
        assert!(matches!(err, Some(WidgetError::InvalidConfig(_))));
    }

    #[test]
    fn test_highlight_engine_failure_is_reported() {
        let (host, mut page, theme) = setup();
        host.fail_engine(tether_core::headless::HIGHLIGHT_ENGINE);
        let hl = Highlight::new("x", "rust", &theme, &AssetPaths::default()).unwrap();

        let err = page.mount(hl.widget()).unwrap_err();
        assert!(matches!(err, WidgetError::Host(HostError::Engine { .. })));
        assert_eq!(host.failures().len(), 1);
        assert_eq!(hl.widget().scope().state(), ScopeState::Failed);
    }

    #[test]
    fn test_latex_initializes_then_updates() {
        let (host, mut page, theme) = setup();
        let latex = Latex::new("a^2 + b^2", &theme, &AssetPaths::default()).unwrap();
        latex.invoke("c^2".to_string()).unwrap();
        page.mount(latex.widget()).unwrap();

        let container = node(latex.widget(), "container");
        let calls = host.take_calls();
        assert_eq!(
            &calls[2..],
            &[
                HostCall::TypesetInit {
                    node: container.clone()
                },
                HostCall::TypesetUpdate {
                    node: container.clone(),
                    source: "c^2".to_string()
                },
            ]
        );

        latex.trigger().unwrap();
        assert_eq!(
            host.take_calls(),
            vec![HostCall::TypesetUpdate {
                node: container,
                source: "c^2".to_string()
            }]
        );
    }

    #[test]
    fn test_latex_missing_container() {
        let (host, mut page, theme) = setup();
        host.remove_node("container");
        let latex = Latex::new("x", &theme, &AssetPaths::default()).unwrap();
        let err = page.mount(latex.widget()).unwrap_err();
        assert!(matches!(
            err,
            WidgetError::Host(HostError::MissingNode { ref name, .. }) if name == "container"
        ));
    }

    #[test]
    fn test_notifications_dismiss_middle() {
        let theme = Theme::default();
        let n = Notifications::new(vec![Text("A"), Text("B"), Text("C")], &theme).unwrap();

        assert!(n.dismiss(1));
        assert_eq!(texts(&n.list()), vec!["A", "C"]);
        assert!(!n.dismiss(5));
        assert_eq!(texts(&n.list()), vec!["A", "C"]);
    }

    #[test]
    fn test_notifications_stale_key_ignored() {
        let theme = Theme::default();
        let n = Notifications::new(vec![Text("A"), Text("B")], &theme).unwrap();
        let key = n.list().get()[0].key;

        assert!(n.dismiss_key(key));
        assert!(!n.dismiss_key(key));
        assert_eq!(texts(&n.list()), vec!["B"]);

        let pushed = n.push(Text("C"));
        assert_ne!(pushed, key);
        assert_eq!(texts(&n.list()), vec!["B", "C"]);
    }

    #[test]
    fn test_notifications_close_button_resolves_at_click_time() {
        let (host, mut page, theme) = setup();
        let n = Notifications::new(vec![Text("A"), Text("B"), Text("C")], &theme).unwrap();
        page.mount(n.widget()).unwrap();
        let list = node(n.widget(), "list");
        assert!(host.content(&list).unwrap().contains("</button>B</div>"));

        let rendered = n.list_view(&theme);
        let close = rendered.clickables();
        assert_eq!(close.len(), 3);

        // The list shrinks before the click; B's button must still remove B.
        n.dismiss(0);
        assert!(close[1].click());
        assert_eq!(texts(&n.list()), vec!["C"]);
        assert!(!host.content(&list).unwrap().contains("</button>B</div>"));

        // A is already gone.
        close[0].click();
        assert_eq!(texts(&n.list()), vec!["C"]);
    }

    #[test]
    fn test_notifications_invoke_replaces_list() {
        let (host, mut page, theme) = setup();
        let n = Notifications::new(vec![Text("A")], &theme).unwrap();
        page.mount(n.widget()).unwrap();
        assert_eq!(rerenders(&host), 1);

        n.invoke(vec![Text("X"), Text("Y")]).unwrap();
        assert_eq!(texts(&n.widget().output::<Vec<Notice>>().unwrap()), vec!["X", "Y"]);
        assert_eq!(rerenders(&host), 2);
    }

    #[test]
    fn test_accordion_single_holds_last_click() {
        let theme = Theme::default();
        let acc = Accordion::single(options(3), &theme).unwrap();
        for i in [2, 0, 1, 1] {
            assert!(acc.toggle(i));
        }
        assert_eq!(acc.index().get(), Selection::Single(1));
        assert!(!acc.toggle(3));
        assert_eq!(acc.index().get(), Selection::Single(1));

        let active: Vec<bool> = acc.records().iter().map(|r| r.active).collect();
        assert_eq!(active, vec![false, true, false]);
    }

    #[test]
    fn test_accordion_multiple_flips_membership() {
        let theme = Theme::default();
        let acc = Accordion::multiple(options(3), &theme).unwrap();
        acc.toggle(0);
        acc.toggle(2);
        acc.toggle(0);
        acc.toggle(2);
        acc.toggle(2);
        assert_eq!(acc.index().get(), Selection::Multiple(BTreeSet::from([2])));
    }

    #[test]
    fn test_accordion_options_change_clamps_selection() {
        let theme = Theme::default();
        let single = Accordion::new(options(3), Selection::Single(2), &theme).unwrap();
        single.set_options(options(2));
        assert_eq!(single.index().get(), Selection::Single(1));

        let multi = Accordion::new(options(3), Selection::Multiple(BTreeSet::from([0, 2])), &theme).unwrap();
        multi.set_options(options(1));
        assert_eq!(multi.index().get(), Selection::Multiple(BTreeSet::from([0])));
    }

    #[test]
    fn test_accordion_rejects_bad_selection() {
        let theme = Theme::default();
        assert!(matches!(
            Accordion::new(options(2), Selection::Single(2), &theme),
            Err(WidgetError::InvalidConfig(_))
        ));

        let acc = Accordion::single(options(2), &theme).unwrap();
        let err = acc.invoke(Selection::Multiple(BTreeSet::new())).unwrap_err();
        assert!(matches!(err, WidgetError::InvalidConfig(_)));
        acc.invoke(Selection::Single(1)).unwrap();
        assert_eq!(acc.index().get(), Selection::Single(1));
    }

    #[test]
    fn test_accordion_header_click_rerenders() {
        let (host, mut page, theme) = setup();
        let acc = Accordion::single(options(3), &theme).unwrap();
        page.mount(acc.widget()).unwrap();
        assert_eq!(rerenders(&host), 1);

        let headers = acc.panels_view(&theme).clickables();
        assert_eq!(headers.len(), 3);
        headers[2].click();
        assert_eq!(acc.index().get(), Selection::Single(2));
        assert_eq!(rerenders(&host), 2);

        let html = host.content(&node(acc.widget(), "panels")).unwrap();
        assert_eq!(html.matches("aria-expanded=\"true\"").count(), 1);
        assert!(html.contains("body 2"));
    }

    #[test]
    fn test_accordion_stale_header_ignored_after_options_shrink() {
        let theme = Theme::default();
        let single = Accordion::single(options(3), &theme).unwrap();
        let headers = single.panels_view(&theme).clickables();
        single.set_options(options(1));
        headers[2].click();
        assert_eq!(single.index().get(), Selection::Single(0));

        let multi = Accordion::multiple(options(3), &theme).unwrap();
        let headers = multi.panels_view(&theme).clickables();
        multi.set_options(options(1));
        headers[2].click();
        assert_eq!(multi.index().get(), Selection::Multiple(BTreeSet::new()));
        headers[0].click();
        assert_eq!(multi.index().get(), Selection::Multiple(BTreeSet::from([0])));
    }

    #[test]
    fn test_accordion_records_serialize() {
        let theme = Theme::default();
        let acc = Accordion::single(vec![AccordionOption::from_markup("One", "<b>1</b>")], &theme).unwrap();
        let json = serde_json::to_value(acc.records()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "i": 0, "label": "One", "content": "<b>1</b>", "active": true }])
        );
    }

    #[test]
    fn test_build_every_variant() {
        let (host, mut page, _) = setup();
        let config = Config::default();
        let specs = vec![
            WidgetSpec::Alert { text: "hi".into() },
            WidgetSpec::Confirm {
                text: "ok?".into(),
                callback: Rc::new(|_: bool| {}),
            },
            WidgetSpec::Highlight {
                text: "x".into(),
                language: "python".into(),
            },
            WidgetSpec::Latex { source: "x".into() },
            WidgetSpec::Notifications {
                items: vec![Text("n")],
            },
            WidgetSpec::Accordion {
                options: options(2),
                multiple: true,
            },
        ];
        let elements: Vec<Element> = specs
            .into_iter()
            .map(|s| build(s, &config).unwrap())
            .collect();
        let kinds: Vec<&str> = elements.iter().map(Element::kind).collect();
        assert_eq!(
            kinds,
            vec!["alert", "confirm", "highlight", "latex", "notifications", "accordion"]
        );

        for e in &elements {
            page.mount(e.widget()).unwrap();
        }
        assert_eq!(page.len(), 6);
        elements[0].trigger().unwrap();
        assert_eq!(host.alerts(), vec!["hi"]);
        assert!(host.failures().is_empty());
    }

    #[test]
    fn test_code_block_markup() {
        let view = CodeBlock(Modifier::new().class("tether-highlight"), "code", "rust");
        insta::assert_snapshot!(
            markup::to_html(&view),
            @r#"<pre class="tether-highlight"><code class="language-rust" data-ref="code" role="code"></code></pre>"#
        );
    }
}
