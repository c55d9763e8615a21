use clap::Parser;
use task_cli::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    // No subcommand means no work, not even a load
    let Some(command) = args.command else {
        return Ok(());
    };

    if let Err(error) = run(command) {
        if error.is_recoverable() {
            // Lookup misses and the save guard print like regular output
            // and the process still exits 0
            println!("{}", error);
        } else {
            return Err(error.into());
        }
    }
    Ok(())
}

fn run(command: Commands) -> Result<()> {
    // Load tasks from file into memory, creating an empty file on first run
    let mut store = TaskStore::load()?;

    match command {
        Commands::List { status } => {
            match status {
                None => {
                    println!("Listing All tasks....\n");
                    display_tasks(store.list.tasks.iter());
                }
                Some(status) => {
                    println!("Listing {} tasks....\n", status);
                    display_tasks(store.list.tasks.iter().filter(|task| task.status == status));
                }
            }
            println!("\nOK");
        }
        Commands::Add { name } => {
            // The id is announced before the save, in the order the tool
            // has always printed it
            let id = store.list.next_id();
            store.list.tasks.push(Task {
                id,
                name,
                status: Status::Todo,
            });
            println!("Adding Task with id: {}", id);
            store.save()?;
            println!("\nAdded Successfully.");
        }
        Commands::Delete { id } => {
            let index = store.list.find_index(id)?;
            store.list.tasks.remove(index);
            store.save()?;
            println!("\nDeleted Successfully.");
        }
        Commands::Update { id, name } => {
            let index = store.list.find_index(id)?;
            store.list.tasks[index].name = name;
            store.save()?;
            println!("\nUpdated Successfully.");
        }
        Commands::Mark { id, status } => {
            let index = store.list.find_index(id)?;
            store.list.tasks[index].status = status;
            store.save()?;
            println!("\nMarked Successfully.");
        }
    }
    Ok(())
}

fn display_tasks<'a>(tasks: impl Iterator<Item = &'a Task>) {
    for task in tasks {
        println!(
            "ID: {} - Task Name: {} - Status: {}",
            task.id, task.name, task.status
        );
    }
}
