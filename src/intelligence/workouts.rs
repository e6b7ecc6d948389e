// ABOUTME: Fixed weekly workout schedules selected by fitness goal
// ABOUTME: Fat loss, muscle growth and balanced weekly templates with per-day exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::FitnessGoal;

/// One training day of a weekly schedule
#[derive(Debug, Clone, Copy)]
pub struct WorkoutDay {
    /// Day and focus, e.g. `Monday - Full Body Strength`
    pub title: &'static str,
    /// Exercise lines
    pub exercises: &'static [&'static str],
}

/// Weekly schedule template
#[derive(Debug, Clone, Copy)]
pub struct WeeklySchedule {
    /// Schedule heading
    pub title: &'static str,
    /// Training days in order
    pub days: &'static [WorkoutDay],
}

/// Fat loss week: strength and cardio alternating
pub const FAT_LOSS: WeeklySchedule = WeeklySchedule {
    title: "Weekly Workout Schedule (Focus: Fat Loss)",
    days: &[
        WorkoutDay {
            title: "Monday - Full Body Strength",
            exercises: &[
                "Squats: 3 sets x 12 reps",
                "Push-ups: 3 sets x 15 reps",
                "Dumbbell rows: 3 sets x 12 reps",
                "Plank: 3 sets x 45 seconds",
            ],
        },
        WorkoutDay {
            title: "Tuesday - Cardio",
            exercises: &[
                "30 minutes moderate intensity (running, cycling, or swimming)",
                "Or HIIT: 20 minutes (30 sec sprint, 30 sec rest)",
            ],
        },
        WorkoutDay {
            title: "Wednesday - Active Recovery",
            exercises: &["Light yoga or stretching", "20-minute walk"],
        },
        WorkoutDay {
            title: "Thursday - Upper Body",
            exercises: &[
                "Bench press or push-ups: 3 sets x 12 reps",
                "Shoulder press: 3 sets x 12 reps",
                "Bicep curls: 3 sets x 15 reps",
                "Tricep dips: 3 sets x 12 reps",
            ],
        },
        WorkoutDay {
            title: "Friday - Cardio",
            exercises: &[
                "30-40 minutes steady state",
                "Mix of incline walking or jogging",
            ],
        },
        WorkoutDay {
            title: "Saturday - Lower Body",
            exercises: &[
                "Lunges: 3 sets x 12 reps per leg",
                "Deadlifts: 3 sets x 10 reps",
                "Leg press: 3 sets x 15 reps",
                "Calf raises: 3 sets x 20 reps",
            ],
        },
        WorkoutDay {
            title: "Sunday - Rest",
            exercises: &["Complete rest or light stretching"],
        },
    ],
};

/// Muscle growth week: body-part split
pub const MUSCLE_GROWTH: WeeklySchedule = WeeklySchedule {
    title: "Weekly Workout Schedule (Focus: Muscle Growth)",
    days: &[
        WorkoutDay {
            title: "Monday - Chest & Triceps",
            exercises: &[
                "Barbell bench press: 4 sets x 8-10 reps",
                "Incline dumbbell press: 3 sets x 10-12 reps",
                "Cable flyes: 3 sets x 12-15 reps",
                "Tricep pushdowns: 3 sets x 12 reps",
                "Overhead tricep extension: 3 sets x 12 reps",
            ],
        },
        WorkoutDay {
            title: "Tuesday - Back & Biceps",
            exercises: &[
                "Deadlifts: 4 sets x 6-8 reps",
                "Pull-ups: 3 sets x max reps",
                "Barbell rows: 3 sets x 10 reps",
                "Barbell curls: 3 sets x 12 reps",
                "Hammer curls: 3 sets x 12 reps",
            ],
        },
        WorkoutDay {
            title: "Wednesday - Rest or Light Cardio",
            exercises: &["20 minutes light walking or cycling"],
        },
        WorkoutDay {
            title: "Thursday - Shoulders & Abs",
            exercises: &[
                "Military press: 4 sets x 8-10 reps",
                "Lateral raises: 3 sets x 12-15 reps",
                "Front raises: 3 sets x 12 reps",
                "Face pulls: 3 sets x 15 reps",
                "Hanging leg raises: 3 sets x 15 reps",
            ],
        },
        WorkoutDay {
            title: "Friday - Legs",
            exercises: &[
                "Squats: 4 sets x 8-10 reps",
                "Romanian deadlifts: 3 sets x 10 reps",
                "Leg press: 3 sets x 12 reps",
                "Leg curls: 3 sets x 12 reps",
                "Calf raises: 4 sets x 15 reps",
            ],
        },
        WorkoutDay {
            title: "Saturday - Arms",
            exercises: &[
                "Close-grip bench: 3 sets x 10 reps",
                "Dips: 3 sets x max reps",
                "Preacher curls: 3 sets x 12 reps",
                "Concentration curls: 3 sets x 12 reps",
            ],
        },
        WorkoutDay {
            title: "Sunday - Rest",
            exercises: &["Complete rest and recovery"],
        },
    ],
};

/// Balanced week for maintenance, fitness and health goals
pub const BALANCED: WeeklySchedule = WeeklySchedule {
    title: "Weekly Workout Schedule (Balanced Approach)",
    days: &[
        WorkoutDay {
            title: "Monday, Wednesday, Friday - Strength Training",
            exercises: &[
                "Full body workout",
                "Focus on compound movements",
                "45-60 minutes per session",
            ],
        },
        WorkoutDay {
            title: "Tuesday, Thursday - Cardio",
            exercises: &[
                "30 minutes moderate intensity",
                "Mix of running, cycling, or swimming",
            ],
        },
        WorkoutDay {
            title: "Weekend - Active Recovery",
            exercises: &["Yoga, hiking, or sports", "Light activity for recovery"],
        },
    ],
};

/// Progressive overload guidance
pub const PROGRESSIVE_OVERLOAD: &[&str] = &[
    "Increase weights by 2-5% when you can complete all sets comfortably",
    "Track your workouts in a journal or app",
    "Focus on proper form before increasing weight",
];

/// Recovery guidance
pub const RECOVERY_TIPS: &[&str] = &[
    "Get 7-9 hours of sleep per night",
    "Take rest days seriously",
    "Foam roll and stretch regularly",
    "Listen to your body and avoid overtraining",
];

/// Schedule for a goal
#[must_use]
pub fn schedule_for(goal: FitnessGoal) -> &'static WeeklySchedule {
    match goal {
        FitnessGoal::LoseWeight => &FAT_LOSS,
        FitnessGoal::GainMuscle => &MUSCLE_GROWTH,
        FitnessGoal::Maintain | FitnessGoal::ImproveFitness | FitnessGoal::ImproveHealth => {
            &BALANCED
        }
    }
}
