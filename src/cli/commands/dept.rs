use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::store::EventStore;
use crate::ui::messages::{info, success};
use crate::utils::time::now_local;

/// Manage the department list (and the current department).
///
/// The list lives in the config; the event log keeps every department's
/// rows even after removal. Rename rewrites the department column in
/// place, and switch clocks out a session left open elsewhere.
pub fn handle(cmd: &Commands, cfg: &Config, is_test: bool) -> AppResult<()> {
    if let Commands::Dept {
        list,
        add,
        remove,
        rename,
        switch,
    } = cmd
    {
        let mut cfg = cfg.clone();
        let mut changed = false;

        if let Some(name) = add {
            let name = name.trim();
            if name.is_empty() {
                return Err(AppError::Config("Department name cannot be empty".into()));
            }
            if cfg.departments.iter().any(|d| d == name) {
                return Err(AppError::DepartmentExists(name.to_string()));
            }
            cfg.departments.push(name.to_string());
            changed = true;
            success(format!("Added department: {}", name));
        }

        if let Some(pair) = rename {
            let (old, new) = (pair[0].trim(), pair[1].trim());
            if new.is_empty() {
                return Err(AppError::Config("Department name cannot be empty".into()));
            }
            let idx = cfg
                .departments
                .iter()
                .position(|d| d == old)
                .ok_or_else(|| AppError::UnknownDepartment(old.to_string()))?;
            if cfg.departments.iter().any(|d| d == new) {
                return Err(AppError::DepartmentExists(new.to_string()));
            }

            cfg.departments[idx] = new.to_string();
            if cfg.current_department == old {
                cfg.current_department = new.to_string();
            }

            let store = EventStore::open(&cfg.log_file)?;
            store.rename_department(old, new)?;

            changed = true;
            success(format!("Renamed department: {} → {}", old, new));
        }

        if let Some(name) = remove {
            if cfg.departments.len() <= 1 {
                return Err(AppError::LastDepartment);
            }
            let idx = cfg
                .departments
                .iter()
                .position(|d| d == name)
                .ok_or_else(|| AppError::UnknownDepartment(name.to_string()))?;

            cfg.departments.remove(idx);
            if &cfg.current_department == name {
                cfg.current_department = cfg.departments[0].clone();
            }
            changed = true;
            success(format!("Removed department: {} (events kept in the log)", name));
        }

        if let Some(name) = switch {
            if !cfg.departments.iter().any(|d| d == name) {
                return Err(AppError::UnknownDepartment(name.to_string()));
            }

            // switching closes the session left open in another department
            let store = EventStore::open(&cfg.log_file)?;
            if let Some(open) = store.current_open_department()? {
                if &open != name {
                    store.append(Action::Out, &open, now_local())?;
                    info(format!("Clocked OUT — {}", open));
                }
            }

            cfg.current_department = name.clone();
            changed = true;
            success(format!("Current department: {}", name));
        }

        if *list || !changed {
            for d in &cfg.departments {
                let marker = if d == &cfg.current_department { "*" } else { " " };
                println!("{} {}", marker, d);
            }
        }

        if changed && !is_test {
            cfg.save()?;
        }
    }

    Ok(())
}
