//! Interactive demo driving the screen flows against the in-memory backend.

use std::error::Error;
use std::sync::Arc;

use chrono::Utc;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use split_core::api::{InMemoryApi, SplitApi};
use split_core::config::ConfigManager;
use split_core::domain::{EntityId, Group};
use split_core::flows::{
    FlowResult, GroupCreateFlow, InviteCreateFlow, InviteDeleteFlow, PurchaseCreateFlow,
    TransferCreateFlow,
};
use split_core::forms::{group, invite, purchase, transfer};
use split_core::notify::Notifier;
use split_core::screen::{DismissReason, ScreenHost};
use split_core::store::ClientStores;

const USER_SCOPE: EntityId = 0;

struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify_success(&self, message: &str) {
        println!("{} {}", "✔".green(), message.green());
    }

    fn notify_error(&self, message: &str) {
        println!("{} {}", "✘".red(), message.red());
    }
}

struct ConsoleScreen;

impl ScreenHost for ConsoleScreen {
    fn dismiss(&mut self, reason: DismissReason) {
        match reason {
            DismissReason::Completed => println!("{}", "screen closed (saved)".dimmed()),
            _ => println!("{}", "screen closed".dimmed()),
        }
    }
}

fn main() {
    split_core::init();
    if let Err(err) = run() {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = ConfigManager::new()?.load()?;
    let api = InMemoryApi::new();
    let stores = ClientStores::new();
    let notifier = ConsoleNotifier;
    let theme = ColorfulTheme::default();

    println!("{}", "split_core demo".bold());
    println!("currency: {}  locale: {}", config.currency_symbol, config.locale);

    loop {
        let actions = [
            "Create group",
            "Create purchase",
            "Create transfer",
            "Create invite link",
            "Delete invite link",
            "Quit",
        ];
        let choice = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&actions)
            .default(0)
            .interact()?;

        match choice {
            0 => create_group(&theme, &api, &stores, &notifier)?,
            1 => {
                if let Some(group) = pick_group(&theme, &stores)? {
                    create_purchase(&theme, &api, &stores, &notifier, group)?;
                }
            }
            2 => {
                if let Some(group) = pick_group(&theme, &stores)? {
                    create_transfer(&theme, &api, &stores, &notifier, group)?;
                }
            }
            3 => {
                if let Some(group) = pick_group(&theme, &stores)? {
                    create_invite(&theme, &api, &stores, &notifier, group.id)?;
                }
            }
            4 => {
                if let Some(group) = pick_group(&theme, &stores)? {
                    delete_invite(&theme, &api, &stores, &notifier, group.id)?;
                }
            }
            _ => break,
        }
    }
    Ok(())
}

fn pick_group(
    theme: &ColorfulTheme,
    stores: &ClientStores,
) -> Result<Option<Group>, Box<dyn Error>> {
    let groups = stores.groups.snapshot(USER_SCOPE);
    if groups.is_empty() {
        println!("{}", "no groups yet; create one first".yellow());
        return Ok(None);
    }
    let labels: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    let index = Select::with_theme(theme)
        .with_prompt("Group")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Some(groups[index].clone()))
}

fn text(theme: &ColorfulTheme, prompt: &str, initial: &str) -> Result<String, Box<dyn Error>> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?)
}

fn report_outcome(result: FlowResult) {
    match result {
        FlowResult::Completed => {}
        FlowResult::Invalid(report) => {
            for (field, message) in report.iter() {
                println!("  {} {}", field.yellow(), message);
            }
        }
        FlowResult::Failed(_) | FlowResult::Busy => {}
    }
}

fn create_group(
    theme: &ColorfulTheme,
    api: &InMemoryApi,
    stores: &ClientStores,
    notifier: &ConsoleNotifier,
) -> Result<(), Box<dyn Error>> {
    let mut flow = GroupCreateFlow::new(USER_SCOPE, stores.groups.clone());
    let name = text(theme, "Name", "")?;
    let description = text(theme, "Description", "")?;
    let form = flow.form_mut();
    form.set_value(group::NAME, name);
    form.blur(group::NAME);
    form.set_value(group::DESCRIPTION, description);

    let mut screen = ConsoleScreen;
    let result = flow.submit(api, notifier, &mut screen);
    if result == FlowResult::Completed {
        // Seed two member accounts so transfers have something to select.
        if let Some(created) = stores.groups.snapshot(USER_SCOPE).last() {
            api.seed_account(created.id, "Alice");
            api.seed_account(created.id, "Bob");
        }
    }
    report_outcome(result);
    Ok(())
}

fn create_purchase(
    theme: &ColorfulTheme,
    api: &InMemoryApi,
    stores: &ClientStores,
    notifier: &ConsoleNotifier,
    group: Group,
) -> Result<(), Box<dyn Error>> {
    let today = Utc::now().date_naive();
    let mut flow = PurchaseCreateFlow::new(group, today, stores.transactions.clone());
    let description = text(theme, "Description", "")?;
    let value = text(theme, "Value", "0.0")?;
    let form = flow.form_mut();
    form.set_value(purchase::DESCRIPTION, description);
    form.blur(purchase::DESCRIPTION);
    form.set_value(purchase::VALUE, value);
    form.blur(purchase::VALUE);

    let mut screen = ConsoleScreen;
    report_outcome(flow.submit(api, notifier, &mut screen));
    Ok(())
}

fn create_transfer(
    theme: &ColorfulTheme,
    api: &InMemoryApi,
    stores: &ClientStores,
    notifier: &ConsoleNotifier,
    group: Group,
) -> Result<(), Box<dyn Error>> {
    let accounts = api.list_accounts(group.id)?;
    if accounts.len() < 2 {
        println!("{}", "need at least two accounts for a transfer".yellow());
        return Ok(());
    }
    let labels: Vec<&str> = accounts.iter().map(|a| a.name.as_str()).collect();
    let from = Select::with_theme(theme)
        .with_prompt("From")
        .items(&labels)
        .default(0)
        .interact()?;
    let to = Select::with_theme(theme)
        .with_prompt("To")
        .items(&labels)
        .default(1)
        .interact()?;

    let today = Utc::now().date_naive();
    let mut flow = TransferCreateFlow::new(group, today, stores.transactions.clone());
    let description = text(theme, "Description", "")?;
    let value = text(theme, "Value", "0.0")?;
    let form = flow.form_mut();
    form.set_value(transfer::DESCRIPTION, description);
    form.blur(transfer::DESCRIPTION);
    form.set_value(transfer::VALUE, value);
    form.blur(transfer::VALUE);
    flow.select_creditor(&accounts[from]);
    flow.select_debitor(&accounts[to]);

    let mut screen = ConsoleScreen;
    report_outcome(flow.submit(api, notifier, &mut screen));
    Ok(())
}

fn create_invite(
    theme: &ColorfulTheme,
    api: &InMemoryApi,
    stores: &ClientStores,
    notifier: &ConsoleNotifier,
    group_id: EntityId,
) -> Result<(), Box<dyn Error>> {
    let mut flow = InviteCreateFlow::new(group_id, stores.invites.clone());
    let description = text(theme, "Description", "")?;
    let single_use = Confirm::with_theme(theme)
        .with_prompt("Single use?")
        .default(false)
        .interact()?;
    let form = flow.form_mut();
    form.set_value(invite::DESCRIPTION, description);
    form.blur(invite::DESCRIPTION);
    form.set_value(invite::SINGLE_USE, single_use.to_string());

    let mut screen = ConsoleScreen;
    report_outcome(flow.submit(api, notifier, &mut screen));
    Ok(())
}

fn delete_invite(
    theme: &ColorfulTheme,
    api: &InMemoryApi,
    stores: &ClientStores,
    notifier: &ConsoleNotifier,
    group_id: EntityId,
) -> Result<(), Box<dyn Error>> {
    let invites = stores.invites.snapshot(group_id);
    if invites.is_empty() {
        println!("{}", "no invite links for this group".yellow());
        return Ok(());
    }
    let labels: Vec<String> = invites
        .iter()
        .map(|token| format!("{} ({})", token.description, token.token))
        .collect();
    let index = Select::with_theme(theme)
        .with_prompt("Invite link")
        .items(&labels)
        .default(0)
        .interact()?;

    let flow = InviteDeleteFlow::new(stores.invites.clone());
    let _ = flow.delete(api, notifier, group_id, invites[index].id);
    Ok(())
}
