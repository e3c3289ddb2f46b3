// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Lockstudy-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Lockstudy and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in scenario table.

use crate::model::{CodeListing, Description, Inlines, Scenario, ScenarioCatalog};

pub const PREEMPTION_TITLE: &str = "Scenario 1: High-Priority Preemption";
pub const CIRCULAR_WAIT_TITLE: &str = "Scenario 2: Circular Wait Deadlock";

/// The scenarios shipped with the binary, in display order.
pub fn builtin_catalog() -> ScenarioCatalog {
    ScenarioCatalog::new(vec![preemption_livelock(), circular_wait_deadlock()])
        .expect("built-in scenario titles are unique")
}

fn preemption_livelock() -> Scenario {
    let description = Description::default()
        .heading(2, "High-Priority Preemption - Livelock")
        .paragraph(
            Inlines::new()
                .text("In this scenario, a low-priority task gets repeatedly ")
                .strong("preempted")
                .text(
                    " by a high-priority task. The system keeps giving control to the \
                     high-priority task, preventing the low-priority task from making progress.",
                ),
        )
        .heading(3, "🛠 How This Happens")
        .list([
            Inlines::from("A low-priority process starts executing."),
            Inlines::from("A high-priority process arrives and preempts it."),
            Inlines::new()
                .text("Before the low-priority process can resume, the high-priority process gets scheduled ")
                .strong("again")
                .text("."),
            Inlines::new()
                .text("This cycle repeats indefinitely, leading to ")
                .strong("livelock")
                .text("."),
        ])
        .heading(3, "🎯 Real-World Example")
        .paragraph("Imagine two people trying to pass through a doorway:")
        .list([
            Inlines::from("The first person (low priority) steps forward."),
            Inlines::new()
                .text("The second person (high priority) ")
                .strong("interrupts")
                .text(" and moves forward instead."),
            Inlines::new()
                .text("The first person tries again, but the second person ")
                .strong("keeps taking priority")
                .text("."),
            Inlines::from("This goes on forever, and neither moves forward effectively."),
        ])
        .heading(3, "✅ Possible Solutions")
        .list([
            Inlines::new()
                .strong("Priority Aging:")
                .text(" Gradually increase the priority of waiting tasks."),
            Inlines::new()
                .strong("Time-Slice Allocation:")
                .text(" Restrict high-priority tasks from running indefinitely."),
            Inlines::new()
                .strong("Fair Scheduling:")
                .text(" Use algorithms like ")
                .strong("Round Robin")
                .text(" to prevent starvation."),
        ]);

    let code = CodeListing::new()
        .with_file("Task.java", PREEMPTION_TASK_JAVA)
        .and_then(|listing| listing.with_file("Main.java", PREEMPTION_MAIN_JAVA))
        .expect("built-in code listing");

    Scenario::new(
        PREEMPTION_TITLE,
        "A low-priority process gets constantly preempted by a high-priority process, causing livelock.",
    )
    .with_description(description)
    .with_code(code)
}

fn circular_wait_deadlock() -> Scenario {
    let code = CodeListing::new()
        .with_file("Task.java", CIRCULAR_TASK_JAVA)
        .and_then(|listing| listing.with_file("Main.java", CIRCULAR_MAIN_JAVA))
        .expect("built-in code listing");

    Scenario::new(
        CIRCULAR_WAIT_TITLE,
        "Processes hold resources while waiting for others, causing deadlock.",
    )
    .with_code(code)
}

const PREEMPTION_TASK_JAVA: &str = r#"
import java.util.concurrent.PriorityBlockingQueue;
import java.util.concurrent.atomic.AtomicBoolean;

public class Task implements Runnable, Comparable<Task> {
    private final String name;
    private final int priority;
    private final AtomicBoolean lowPriorityDone;
    private final int executionTime;

    public Task(String name, int priority, AtomicBoolean lowPriorityDone, int executionTime) {
        this.name = name;
        this.priority = priority;
        this.lowPriorityDone = lowPriorityDone;
        this.executionTime = executionTime;
    }

    // Getter for 'name'
    public String getName() {
        return name;
    }

    @Override
    public int compareTo(Task other) {
        return Integer.compare(other.priority, this.priority); // Higher priority first
    }

    @Override
    public void run() {
        if ("High Priority Task".equals(name)) {
            if (!lowPriorityDone.get()) {
                System.out.println(name + " preempting low-priority task! Can't proceed...");
                return;
            }
        }

        System.out.println(name + " is running...");
        try { Thread.sleep(executionTime); } catch (InterruptedException e) { }

        if ("Low Priority Task".equals(name)) {
            lowPriorityDone.set(true);
            System.out.println(name + " has completed!");
        }
    }
}"#;

const PREEMPTION_MAIN_JAVA: &str = r#"
import java.util.concurrent.PriorityBlockingQueue;
import java.util.concurrent.atomic.AtomicBoolean;

public class Main {
    public static void main(String[] args) {
        AtomicBoolean lowPriorityDone = new AtomicBoolean(false);
        PriorityBlockingQueue<Task> scheduler = new PriorityBlockingQueue<>();

        Task lowPriorityTask = new Task("Low Priority Task", 1, lowPriorityDone, 2000);
        Task highPriorityTask = new Task("High Priority Task", 2, lowPriorityDone, 500);

        scheduler.add(lowPriorityTask);
        scheduler.add(highPriorityTask);

        while (true) {
            Task nextTask = scheduler.poll();
            if (nextTask != null) {
                new Thread(nextTask).start();

                // Use the getter instead of direct access
                if (!lowPriorityDone.get() && "High Priority Task".equals(nextTask.getName())) {
                    scheduler.add(nextTask); // Requeue high-priority task
                }
            }

            try { Thread.sleep(300); } catch (InterruptedException e) { }
        }
    }
}"#;

const CIRCULAR_TASK_JAVA: &str = r#"public class Task {
    private final String name;

    public Task(String name) {
        this.name = name;
    }

    public synchronized void execute(Task other) {
        System.out.println(name + " is waiting for " + other.name);
        other.process();
    }

    public synchronized void process() {
        System.out.println(name + " is executing.");
    }
}"#;

const CIRCULAR_MAIN_JAVA: &str = r#"public class Main {
    public static void main(String[] args) {
        Task taskA = new Task("Task A");
        Task taskB = new Task("Task B");

        new Thread(() -> taskA.execute(taskB)).start();
        new Thread(() -> taskB.execute(taskA)).start();
    }
}"#;
