//! Walkthrough of a clinic day: a triage queue deciding who is seen next,
//! and the staff roster that will see them.
//!
//! ```bash
//! cargo run --example emergency_room
//! ```

use clinic_triage::{Patient, Side, StaffRoster, TriageQueue};

fn print_queue(queue: &TriageQueue) {
    println!("Current queue:");
    for patient in queue {
        println!("- {}", patient);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut queue = TriageQueue::new();
    queue.insert(Patient::new(3, "Jordan")?);
    queue.insert(Patient::new(1, "Taylor")?);
    queue.insert(Patient::new(5, "Avery")?);
    print_queue(&queue);

    let next_up = queue.peek()?;
    println!("Next up: {}", next_up);

    let served = queue.extract_min()?;
    println!("Served: {}", served.name());
    print_queue(&queue);

    let mut roster = StaffRoster::new();
    roster.set_root("Dr. Croft")?;
    roster.insert("Dr. Croft", "Dr. Goldsmith", Side::Right)?;
    roster.insert("Dr. Croft", "Dr. Phan", Side::Left)?;
    roster.insert("Dr. Phan", "Dr. Carson", Side::Right)?;
    roster.insert("Dr. Phan", "Dr. Morgan", Side::Left)?;

    println!("Preorder:  {:?}", roster.preorder());
    println!("Inorder:   {:?}", roster.inorder());
    println!("Postorder: {:?}", roster.postorder());

    Ok(())
}
