//! The scripted demonstration: show all, legends, current, then one silent
//! combined query.

use std::cell::RefCell;
use std::fmt::Write;
use std::rc::Rc;

use anyhow::Result;
use controller::{ListenerHooks, PilotController};
use roster::{Pilot, PilotCategory};

/// Run the demo over `pilots` and return everything it prints.
pub fn render_demo(pilots: Vec<Pilot>) -> Result<String> {
    let output = Rc::new(RefCell::new(String::new()));
    let mut controller = PilotController::with_pilots(pilots);

    let sink = Rc::clone(&output);
    controller.add_listener(ListenerHooks::new().when_filter_changed(move |category, pilots| {
        let mut out = sink.borrow_mut();
        writeln!(out)?;
        writeln!(out, "=== Filtro: {} ===", category.display_name())?;
        for pilot in pilots {
            writeln!(out, "{pilot}")?;
        }
        writeln!(out, "Total: {} pilotos", pilots.len())?;
        Ok(())
    }));

    writeln!(output.borrow_mut(), "Demonstração do Sistema de Filtros")?;

    controller.show_all()?;
    controller.show_legends()?;
    controller.show_current()?;

    // Goes straight to the service, so no listener sees it
    let active_legends = controller
        .filter_service()
        .filter_by_multiple_criteria(PilotCategory::Legend, true, 3);
    tracing::info!("Custom query matched {} pilots", active_legends.len());

    let mut out = output.borrow_mut();
    writeln!(out)?;
    writeln!(out, "=== Filtro Personalizado: Lendas Ativas com 3+ Campeonatos ===")?;
    for pilot in &active_legends {
        writeln!(out, "{pilot}")?;
    }

    Ok(out.clone())
}
