//! Exercise Table Component
//!
//! One row per record with edit and delete actions. The table only renders
//! what it is given; the owning page decides what the actions do.

use leptos::*;
use leptos_router::*;

use crate::app::CREATE_PATH;
use crate::model::Exercise;

/// Column headings, in display order
pub const COLUMNS: [&str; 4] = ["Name", "Reps", "Weight", "Date"];

/// Display text for each data column of a row
pub fn row_cells(exercise: &Exercise) -> [String; 4] {
    [
        exercise.name.clone(),
        exercise.reps.to_string(),
        exercise.weight_label(),
        exercise.date.clone(),
    ]
}

/// One entry per record, in the order given, paired with its display cells
pub fn table_rows(exercises: &[Exercise]) -> Vec<(Exercise, [String; 4])> {
    exercises
        .iter()
        .map(|exercise| (exercise.clone(), row_cells(exercise)))
        .collect()
}

#[component]
pub fn ExerciseTable(
    exercises: Vec<Exercise>,
    /// Disables the row actions while a change is in flight
    #[prop(into)]
    busy: Signal<bool>,
    on_edit: Callback<Exercise>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let rows = table_rows(&exercises);
    if rows.is_empty() {
        return view! {
            <div class="bg-gray-800 rounded-lg p-8 text-center">
                <p class="text-gray-400 mb-4">"No exercises logged yet."</p>
                <A
                    href=CREATE_PATH
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Add your first exercise"
                </A>
            </div>
        }
        .into_view();
    }

    view! {
        <div class="bg-gray-800 rounded-lg overflow-hidden">
            <table class="w-full text-left">
                <thead class="bg-gray-700 text-gray-300 text-sm uppercase">
                    <tr>
                        {COLUMNS.iter().map(|&column| view! { <th class="px-4 py-3">{column}</th> }).collect_view()}
                        <th class="px-4 py-3" />
                        <th class="px-4 py-3" />
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|(exercise, cells)| view! {
                            <ExerciseRow
                                exercise=exercise
                                cells=cells
                                busy=busy
                                on_edit=on_edit
                                on_delete=on_delete
                            />
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_view()
}

#[component]
fn ExerciseRow(
    exercise: Exercise,
    cells: [String; 4],
    busy: Signal<bool>,
    on_edit: Callback<Exercise>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let id = exercise.id.clone();

    view! {
        <tr class="border-t border-gray-700 hover:bg-gray-750">
            {cells.into_iter().map(|cell| view! { <td class="px-4 py-3">{cell}</td> }).collect_view()}
            <td class="px-4 py-3">
                <button
                    class="text-primary-400 hover:text-primary-300"
                    title="Edit"
                    disabled=move || busy.get()
                    on:click=move |_| on_edit.call(exercise.clone())
                >
                    "✎"
                </button>
            </td>
            <td class="px-4 py-3">
                <button
                    class="text-red-400 hover:text-red-300"
                    title="Delete"
                    disabled=move || busy.get()
                    on:click=move |_| on_delete.call(id.clone())
                >
                    "🗑"
                </button>
            </td>
        </tr>
    }
}
