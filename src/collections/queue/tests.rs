#![cfg(test)]

use super::*;
use crate::collections::traits::{Container, Insert, Remove};
use crate::error::{KindMismatch, NotFound, RemoveError};
use crate::value::{Tofu, TofuKind};

fn int(value: i64) -> Tofu {
    Tofu::from_integer(value)
}

#[test]
fn test_queue_fifo() {
    let mut queue = Queue::new(TofuKind::Integer);
    assert_eq!(queue.dequeue(), None);

    queue.insert_all([int(1), int(2), int(3)]).expect("integers");
    assert_eq!(queue.front(), Some(&int(1)));
    assert_eq!(queue.rear(), Some(&int(3)));
    assert_eq!(queue.to_string(), "front [1] [2] [3] rear");

    assert_eq!(queue.dequeue(), Some(int(1)));
    queue.enqueue(int(4)).expect("integer");
    assert_eq!(queue.iter().cloned().collect::<Vec<_>>(), [int(2), int(3), int(4)]);
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_queue_kind_enforcement() {
    let mut queue = Queue::new(TofuKind::Boolean);
    assert_eq!(
        queue.enqueue(Tofu::from_text("yes")),
        Err(KindMismatch {
            expected: TofuKind::Boolean,
            found: TofuKind::Text,
        })
    );
    assert!(queue.is_empty(), "A rejected value shouldn't be enqueued.");
}

#[test]
fn test_queue_remove_by_value() {
    let mut queue = Queue::new(TofuKind::Integer);
    queue.insert_all([int(1), int(2), int(3), int(2)]).expect("integers");

    assert_eq!(queue.remove(&int(2)), Ok(int(2)), "A value in the middle should be removable.");
    assert_eq!(queue.iter().cloned().collect::<Vec<_>>(), [int(1), int(3), int(2)]);
    assert_eq!(queue.remove(&int(9)), Err(RemoveError::NotFound(NotFound)));
    assert!(queue.remove(&Tofu::from_null()).expect_err("wrong kind").is_kind_mismatch());

    assert_eq!(Remove::remove(&mut queue, &int(2)), Ok(int(2)));
    assert_eq!(queue.rear(), Some(&int(3)), "The rear should follow a removed last value.");
    assert_eq!(queue.dequeue(), Some(int(1)));
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_deque_both_ends() {
    let mut deque = Deque::new(TofuKind::Character);
    deque.push_back(Tofu::from_character('b')).expect("character");
    deque.push_front(Tofu::from_character('a')).expect("character");
    deque.insert(Tofu::from_character('c')).expect("character");

    assert_eq!(deque.front(), Some(&Tofu::from_character('a')));
    assert_eq!(deque.back(), Some(&Tofu::from_character('c')));
    assert_eq!(deque.pop_back(), Some(Tofu::from_character('c')));
    assert_eq!(deque.pop_front(), Some(Tofu::from_character('a')));

    assert!(deque.remove(&Tofu::from_character('z')).expect_err("absent").is_not_found());
    assert_eq!(deque.remove(&Tofu::from_character('b')), Ok(Tofu::from_character('b')));
    assert!(deque.is_empty());
    assert!(deque.push_back(Tofu::from_null()).is_err());
}

#[test]
fn test_stack_lifo() {
    let mut stack = Stack::new(TofuKind::Integer);
    stack.push(int(10)).expect("integer");
    stack.push(int(7)).expect("integer");

    assert_eq!(stack.peek(), Some(&int(7)));
    assert_eq!(
        stack.iter().cloned().collect::<Vec<_>>(),
        [int(7), int(10)],
        "Iteration starts at the top."
    );
    assert_eq!(stack.pop(), Some(int(7)));
    assert_eq!(stack.pop(), Some(int(10)));
    assert_eq!(stack.pop(), None);
    assert!(stack.is_empty());
}

#[test]
fn test_stack_rejects_wrong_kind() {
    let mut stack = Stack::new(TofuKind::Double);
    stack.push(Tofu::from_double(0.5)).expect("double");
    assert!(stack.push(int(1)).is_err());
    assert_eq!(stack.len(), 1);
    assert!(stack.contains(&Tofu::from_double(0.5)));
}

#[test]
fn test_stack_remove_by_value() {
    let mut stack = Stack::new(TofuKind::Integer);
    stack.insert_all([int(5), int(6), int(5), int(7)]).expect("integers");

    assert_eq!(stack.remove(&int(5)), Ok(int(5)), "The copy nearest the top should go first.");
    assert_eq!(stack.iter().cloned().collect::<Vec<_>>(), [int(7), int(6), int(5)]);
    assert_eq!(Remove::remove(&mut stack, &int(7)), Ok(int(7)));
    assert_eq!(stack.peek(), Some(&int(6)));

    assert!(stack.remove(&int(7)).expect_err("gone").is_not_found());
    assert!(stack.remove(&Tofu::from_boolean(true)).expect_err("wrong kind").is_kind_mismatch());
    assert_eq!(stack.len(), 2);
}

#[test]
fn test_priority_order() {
    let mut queue = PriorityQueue::new(TofuKind::Integer);
    queue.enqueue(int(10), 2).expect("integer");
    queue.enqueue(int(20), 1).expect("integer");
    queue.enqueue(int(30), 3).expect("integer");

    assert_eq!(queue.peek(), Some(&int(20)));
    assert_eq!(queue.peek_priority(), Some(1));
    assert_eq!(queue.to_string(), "(20 @ 1) -> (10 @ 2) -> (30 @ 3)");
    assert_eq!(queue.dequeue(), Some(int(20)));
    assert_eq!(queue.dequeue(), Some(int(10)));
    assert_eq!(queue.dequeue(), Some(int(30)));
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn test_priority_ties_are_stable() {
    let mut queue = PriorityQueue::new(TofuKind::Text);
    queue.enqueue(Tofu::from_text("first"), 5).expect("text");
    queue.enqueue(Tofu::from_text("urgent"), -1).expect("text");
    queue.enqueue(Tofu::from_text("second"), 5).expect("text");
    queue.enqueue(Tofu::from_text("third"), 5).expect("text");

    let order: Vec<_> =
        queue.iter().map(|value| value.get_text().expect("text").to_owned()).collect();
    assert_eq!(
        order,
        ["urgent", "first", "second", "third"],
        "Equal priorities should keep insertion order."
    );

    assert_eq!(queue.remove(&Tofu::from_text("second")), Ok(Tofu::from_text("second")));
    assert_eq!(queue.dequeue_with_priority(), Some((Tofu::from_text("urgent"), -1)));
    assert_eq!(queue.len(), 2);
    assert!(queue.enqueue(int(0), 0).expect_err("wrong kind").expected.is_text());
}
