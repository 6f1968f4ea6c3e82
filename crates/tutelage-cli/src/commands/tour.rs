//! Query tour command
//!
//! Runs the full sequence of demonstration queries inside one transaction
//! and prints each result section.
//!
//! Usage: tutelage tour [--db <DB>] [--salary <N>] [--name <NAME>] [--prefix <P>]

use clap::Args;
use std::path::PathBuf;
use tutelage_store::queries;

#[derive(Debug, Args)]
pub struct TourArgs {
    /// Path to the SQLite database
    #[arg(long, default_value = super::DEFAULT_DB_PATH)]
    pub db: PathBuf,

    /// Salary used by the filter section
    #[arg(long, default_value_t = 1200)]
    pub salary: i64,

    /// Name used by the single-row lookup and the named query sections
    #[arg(long, default_value = "Homer Simpson")]
    pub name: String,

    /// Prefix used by the wildcard section
    #[arg(long, default_value = "M")]
    pub prefix: String,
}

/// Execute the query tour
pub fn execute(args: TourArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = super::open_store(&args.db)?;

    if queries::count_guides(&conn)? == 0 {
        println!("The roster is empty.");
        println!("Seed it first: tutelage seed import fixtures/simpsons.yaml");
        return Ok(());
    }

    // One transaction wraps the whole tour; an error path drops it,
    // which rolls back
    tracing::debug!("beginning tour transaction");
    let tx = conn.transaction()?;

    println!("-- all guides --");
    for guide in queries::all_guides(&tx)? {
        println!("{}", guide);
    }

    println!("\n-- guide names --");
    for name in queries::guide_names(&tx)? {
        println!("{}", name);
    }

    println!("\n-- guides with salary {} --", args.salary);
    for guide in queries::guides_with_salary(&tx, args.salary)? {
        println!("{}", guide);
    }

    println!("\n-- salary report --");
    for row in queries::salary_report(&tx)? {
        println!("{}: {}", row.name, row.salary);
    }

    println!("\n-- guide by name '{}' --", args.name);
    match queries::guide_by_name(&tx, &args.name)? {
        Some(guide) => println!("{}", guide),
        None => println!("(no match)"),
    }

    println!("\n-- guides named like '{}%' --", args.prefix);
    for guide in queries::guides_named_like(&tx, &args.prefix)? {
        println!("{}", guide);
    }

    println!("\n-- scan (select *) --");
    for guide in queries::scan_guides(&tx)? {
        println!("{}", guide);
    }

    println!("\n-- named query: find_guides_by_name --");
    for guide in queries::named::find_guides_by_name(&tx, &args.name)? {
        println!("{}", guide);
    }

    println!("\n-- count --");
    println!("guides: {}", queries::count_guides(&tx)?);

    println!("\n-- max salary --");
    match queries::max_salary(&tx)? {
        Some(salary) => println!("max: {}", salary),
        None => println!("max: (empty roster)"),
    }

    println!("\n-- inner join: students with a guide --");
    for row in queries::students_with_guides(&tx)? {
        println!("{} <- {}", row.student, row.guide);
    }

    println!("\n-- left outer join: every student --");
    for row in queries::students_with_optional_guides(&tx)? {
        match row.guide {
            Some(guide) => println!("{} <- {}", row.student, guide),
            None => println!("{}", row.student),
        }
    }

    println!("\n-- right outer join: every guide --");
    for row in queries::guided_students(&tx)? {
        match row.student {
            Some(student) => println!("{} <- {}", student, row.guide),
            None => println!("(no student) <- {}", row.guide),
        }
    }

    println!("\n-- eager join: guides with their students --");
    for entry in queries::guides_with_students(&tx)? {
        println!("{}", entry.guide);
        for student in entry.students {
            println!("    {}", student);
        }
    }

    tracing::debug!("committing tour transaction");
    tx.commit()?;

    Ok(())
}
