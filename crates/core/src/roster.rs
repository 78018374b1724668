//! Built-in classification roster.
//!
//! Names of characters known to have been blipped (vanished in the snap and
//! returned five years later) and of characters known to have stayed.

/// Characters that were blipped.
pub const BLIPPED: &[&str] = &[
    "Andre Wilson",
    "Asgardian Actor",
    "Betty Brant",
    "Betty Ross",
    "Big Harv",
    "Billy Peskers",
    "Bucky Barnes",
    "Cammie Conroy",
    "Cooper Barton",
    "David Jerome",
    "Drax",
    "Elijah Cortez",
    "Erik Selvig",
    "Erika Denton",
    "Flash Thompson",
    "Galaga Guy",
    "Groot",
    "Hank Pym",
    "Hope van Dyne",
    "Hiro Kajimoto",
    "Isaiah Sorenson",
    "Jane Foster",
    "Janet van Dyne",
    "Jason Ionello",
    "Karen Oggerton",
    "Laura Barton",
    "Lila Barton",
    "Mantis",
    "Maria Hill",
    "Mary Livanos",
    "May Parker",
    "Michelle Jones",
    "Nathaniel Barton",
    "Ned Leeds",
    "Nick Fury",
    "Peter Parker",
    "Peter Quill",
    "Phillip Carroway",
    "Sam Wilson",
    "Sharon Carter",
    "Shuri",
    "Sif",
    "Stephen Strange",
    "Sue Lorman",
    "T'Challa",
    "Thaddeus Ross",
    "Wanda Maximoff",
    "Wong",
];

/// Characters that were not blipped.
pub const NOT_BLIPPED: &[&str] = &[
    "Tony Stark",
    "Thor",
    "Bruce Banner",
    "Steve Rogers",
    "Natasha Romanoff",
    "James Rhodes",
    "Nebula",
    "Okoye",
    "Rocket Raccoon",
    "Pepper Potts",
    "Thanos",
    "M'Baku",
    "Happy Hogan",
    "Clint Barton",
    "Scott Lang",
    "Carol Danvers",
    "Brunnhilde",
    "Korg",
    "Miek",
    "Akihiko",
    "Cassie Lang",
    "Howard the Duck",
    "Brooklyn Support Group Bobby",
    "Brooklyn Support Group Jimmy",
    "Brad Davis",
    "Roger Harrington",
    "Zach Cooper",
    "Zoha",
    "Yasmin Monette",
    "Tyler Corbyn",
    "Sebastian",
    "Phil Coulson",
    "Melinda May",
    "Daisy Johnson",
    "Leo Fitz",
    "Jemma Simmons",
    "Alphonso Mackenzie",
    "Yo-Yo Rodriguez",
    "Deke Shaw",
    "Enoch",
    "Agent Davis",
    "Agent Piper",
    "Agent Julian",
    "Agent Damon Keller",
    "Agent Diaz",
    "Jaco",
    "Marcus Benson",
    "Pax",
    "Snowflake",
    "Malachi",
    "Boyle",
    "Toad",
    "Trevor Khan",
    "Atarah",
    "Sarge",
    "Izel",
    "Isaiah",
    "Baal-Gad",
    "Alex Wilder",
    "Nico Minoru",
    "Karolina Dean",
    "Gert Yorkes",
    "Chase Stein",
    "Molly Hernandez",
    "Geoffrey Wilder",
    "Leslie Dean",
    "Janet Stein",
    "Victor Stein",
    "Stacey Yorkes",
    "Dale Yorkes",
    "Tina Minoru",
    "Robert Minoru",
    "Morgan le Fay",
    "Tamar",
    "Vaughn Kaye",
    "Bronwyn",
    "Cassandra",
    "Tandy Bowen",
    "Tyrone Johnson",
    "Old Lace",
];
